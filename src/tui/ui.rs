use super::app::{App, DETAILS_FIXED_ROWS, InputMode};
use crate::{
    model::{Addon, FEATURE_CATALOG, ProjectType, TECH_STACKS},
    report,
    wizard::WizardStep,
};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

const ACCENT: Color = Color::Indexed(99);

pub fn draw(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title + progress
            Constraint::Min(0),    // Step content
            Constraint::Length(1), // Footer
        ])
        .split(f.area());

    draw_header(f, app, chunks[0]);

    match app.session.step() {
        WizardStep::ProjectType => draw_project_type(f, app, chunks[1]),
        WizardStep::Details => draw_details(f, app, chunks[1]),
        WizardStep::TechAndRequirements => draw_tech(f, app, chunks[1]),
        WizardStep::Results => draw_results(f, app, chunks[1]),
    }

    draw_footer(f, app, chunks[2]);

    if app.show_help {
        draw_help_popup(f);
    }
}

fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let step = app.session.step();
    let mut spans = vec![
        Span::styled(
            "predicto",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
    ];
    for i in 1..=4 {
        let style = if i == step.index() {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else if i < step.index() {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!("[{}]", i), style));
        if i < 4 {
            spans.push(Span::styled("--", Style::default().fg(Color::DarkGray)));
        }
    }
    spans.push(Span::raw("  "));
    spans.push(Span::styled(
        step.label(),
        Style::default().add_modifier(Modifier::BOLD),
    ));

    let header = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(header, area);
}

fn row_style(selected: bool) -> Style {
    if selected {
        Style::default().fg(Color::Black).bg(ACCENT)
    } else {
        Style::default()
    }
}

fn checkbox(checked: bool) -> &'static str {
    if checked { "[x]" } else { "[ ]" }
}

fn draw_project_type(f: &mut Frame, app: &App, area: Rect) {
    let current = app.session.input().project_type;
    let items: Vec<ListItem> = ProjectType::ALL
        .iter()
        .enumerate()
        .map(|(i, pt)| {
            let marker = if current == Some(*pt) { "(*)" } else { "( )" };
            ListItem::new(format!(" {} {}", marker, pt.label()))
                .style(row_style(i == app.selected))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" What are you building? "),
    );
    f.render_widget(list, area);
}

fn draw_details(f: &mut Frame, app: &App, area: Rect) {
    let input = app.session.input();
    let mut items: Vec<ListItem> = Vec::new();

    let field = |label: &str, value: String, row: usize| -> ListItem {
        let editing = app.input_mode == InputMode::Editing && app.selected == row;
        let shown = if editing {
            format!("{}_", app.edit_buffer)
        } else if value.is_empty() {
            "-".to_string()
        } else {
            value
        };
        ListItem::new(format!(" {:<22} {}", label, shown)).style(row_style(row == app.selected))
    };

    items.push(field(
        "Team size",
        input.team_size.map(|n| n.to_string()).unwrap_or_default(),
        0,
    ));
    items.push(field(
        "Duration (weeks)",
        input
            .duration_weeks
            .map(|n| n.to_string())
            .unwrap_or_default(),
        1,
    ));
    items.push(
        ListItem::new(format!(
            " {:<22} {}",
            "Complexity",
            input
                .complexity
                .map(|c| c.label().to_string())
                .unwrap_or_else(|| "- (press Enter to cycle)".to_string())
        ))
        .style(row_style(app.selected == 2)),
    );
    items.push(field(
        "Location",
        input.location.clone().unwrap_or_default(),
        3,
    ));

    for (i, feature) in FEATURE_CATALOG.iter().enumerate() {
        let row = DETAILS_FIXED_ROWS + i;
        items.push(
            ListItem::new(format!(" {} {}", checkbox(input.has_feature(feature)), feature))
                .style(row_style(row == app.selected)),
        );
    }

    for (i, addon) in Addon::ALL.iter().enumerate() {
        let row = DETAILS_FIXED_ROWS + FEATURE_CATALOG.len() + i;
        items.push(
            ListItem::new(format!(
                " {} {} (+{})",
                checkbox(input.addons.get(*addon)),
                addon.label(),
                report::format_amount(crate::engine::cost::addon_cost(*addon)),
            ))
            .style(row_style(row == app.selected)),
        );
    }

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Details, features, add-ons "),
    );
    f.render_widget(list, area);
}

fn draw_tech(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(area);

    let input = app.session.input();
    let mut items: Vec<ListItem> = TECH_STACKS
        .iter()
        .enumerate()
        .map(|(i, stack)| {
            let marker = if input.tech_stack.as_deref() == Some(*stack) {
                "(*)"
            } else {
                "( )"
            };
            ListItem::new(format!(" {} {}", marker, stack)).style(row_style(i == app.selected))
        })
        .collect();

    let requirements_row = TECH_STACKS.len();
    let editing_requirements =
        app.input_mode == InputMode::Editing && app.selected == requirements_row;
    let requirements = if editing_requirements {
        format!("{}_", app.edit_buffer)
    } else {
        input
            .requirements
            .clone()
            .unwrap_or_else(|| "-".to_string())
    };
    items.push(
        ListItem::new(format!(" {:<22} {}", "Requirements", requirements))
            .style(row_style(app.selected == requirements_row)),
    );

    let attach_row = requirements_row + 1;
    let editing_attach = app.input_mode == InputMode::Editing && app.selected == attach_row;
    let attach = if editing_attach {
        format!("{}_", app.edit_buffer)
    } else if input.documents.is_empty() {
        "- (press Enter, type a path)".to_string()
    } else {
        input
            .documents
            .iter()
            .map(|d| d.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };
    items.push(
        ListItem::new(format!(" {:<22} {}", "Documents", attach))
            .style(row_style(app.selected == attach_row)),
    );

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Tech stack & requirements "),
    );
    f.render_widget(list, chunks[0]);

    draw_live_summary(f, app, chunks[1]);
}

/// The live summary card: recomputed from the input on every draw.
fn draw_live_summary(f: &mut Frame, app: &App, area: Rect) {
    let input = app.session.input();
    let dash = "-".to_string();

    let lines = vec![
        summary_line("Project type", input.project_type.map(|p| p.label().to_string()).unwrap_or(dash.clone())),
        summary_line("Complexity", input.complexity.map(|c| c.to_string()).unwrap_or(dash.clone())),
        summary_line(
            "Duration",
            input
                .duration_weeks
                .map(|w| format!("{} weeks", w))
                .unwrap_or(dash.clone()),
        ),
        summary_line(
            "Team size",
            input.team_size.map(|n| n.to_string()).unwrap_or(dash.clone()),
        ),
        summary_line(
            "Features",
            if input.features.is_empty() {
                "None selected".to_string()
            } else {
                input.features.join(", ")
            },
        ),
    ];

    let summary = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(" Live summary "));
    f.render_widget(summary, area);
}

fn summary_line(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<13}", label), Style::default().fg(Color::DarkGray)),
        Span::raw(value),
    ])
}

fn draw_results(f: &mut Frame, app: &App, area: Rect) {
    let Some(estimate) = app.session.estimate() else {
        return;
    };
    let input = app.session.input();
    let currency = app.config.estimator.currency.as_str();

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            format!(
                "Total Cost: {}{}",
                currency,
                report::format_amount(estimate.total_cost)
            ),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("Confidence: {}%", estimate.confidence)),
        Line::raw(""),
        Line::from(Span::styled("Cost Breakdown", bold)),
    ];
    for (category, amount) in estimate.breakdown.entries() {
        lines.push(Line::from(format!(
            "  {:<20} {}{}",
            category,
            currency,
            report::format_amount(amount)
        )));
    }

    lines.push(Line::raw(""));
    lines.push(Line::from(format!(
        "Timeline: {} weeks    Risk: {}/100",
        estimate.timeline_weeks, estimate.risk_score
    )));
    lines.push(Line::raw(""));

    lines.push(Line::from(Span::styled("Recommended Team", bold)));
    for role in &estimate.team {
        lines.push(Line::from(format!("  - {}", role)));
    }
    lines.push(Line::raw(""));

    lines.push(Line::from(Span::styled("Insights", bold)));
    for insight in &estimate.insights {
        lines.push(Line::from(format!("  * {}", insight)));
    }
    lines.push(Line::raw(""));

    let (band_low, band_high) = report::market_band(estimate.total_cost);
    lines.push(Line::from(format!(
        "Market comparison: {}{} - {}{}",
        currency,
        report::format_amount(band_low),
        currency,
        report::format_amount(band_high)
    )));

    let drivers = report::cost_drivers(input);
    if !drivers.is_empty() {
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled("What increased your cost", bold)));
        for driver in drivers {
            lines.push(Line::from(format!("  * {}", driver)));
        }
    }

    let paragraph = Paragraph::new(lines)
        .scroll((app.result_scroll, 0))
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(" Estimate "));
    f.render_widget(paragraph, area);
}

fn draw_footer(f: &mut Frame, app: &App, area: Rect) {
    let text = if let Some(ref message) = app.message {
        message.clone()
    } else if !app.config.tui.show_hints {
        String::new()
    } else {
        match (app.session.step(), app.input_mode) {
            (_, InputMode::Editing) => "Enter commit | Esc cancel".to_string(),
            (WizardStep::ProjectType, _) => {
                "j/k move | Enter select | n next | q quit | ? help".to_string()
            }
            (WizardStep::Details, _) => {
                "j/k move | Enter edit/toggle | n next | b back | q quit".to_string()
            }
            (WizardStep::TechAndRequirements, _) => {
                "j/k move | Enter select/edit | g generate | b back | q quit".to_string()
            }
            (WizardStep::Results, _) => {
                "j/k scroll | x export | r restart | q quit".to_string()
            }
        }
    };

    let footer = Paragraph::new(text).style(Style::default().fg(Color::DarkGray));
    f.render_widget(footer, area);
}

fn draw_help_popup(f: &mut Frame) {
    let area = centered_rect(60, 50, f.area());
    let lines = vec![
        Line::from(Span::styled(
            "Keybindings",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        Line::raw("j / k          move selection"),
        Line::raw("Enter / Space  select, toggle, or edit the focused row"),
        Line::raw("n / Right      next step (when the gate allows)"),
        Line::raw("b / Left       previous step"),
        Line::raw("g              generate the estimate (step 3)"),
        Line::raw("x              export the estimate to JSON (results)"),
        Line::raw("r              restart the wizard (results)"),
        Line::raw("q              quit; the draft is kept"),
    ];
    let popup = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Help "));
    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
