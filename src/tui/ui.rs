// ui rendering

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs, Wrap},
};

use crate::core::quiz::QUESTIONS;
use crate::core::resources::{CRISIS_MESSAGE, HELPLINES, RESOURCES};
use crate::nav::Tab;
use crate::tui::app::{App, LogLevel, Mode, Popup, Speaker};
use crate::tui::theme::{Theme, ThemeKind};

pub fn render(frame: &mut Frame, app: &mut App) {
    let theme = &app.theme;

    // clear with bg color
    frame.render_widget(Clear, frame.area());
    frame.render_widget(Block::default().style(theme.base()), frame.area());

    // header + tab bar + content + footer
    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_header(frame, app, main[0]);
    render_tabs(frame, app, main[1]);
    render_content(frame, app, main[2]);
    render_footer(frame, app, main[3]);

    match app.popup {
        Popup::Themes => render_theme_popup(frame, app),
        Popup::Crisis => render_crisis_popup(frame, app),
        Popup::None => {}
    }
}

fn render_header(frame: &mut Frame, app: &mut App, area: Rect) {
    let theme = &app.theme;

    let backend = match &app.backend {
        Some(b) => Span::styled(b.clone(), theme.success()),
        None => Span::styled("offline", theme.warning()),
    };

    let mode_str = match app.mode {
        Mode::Normal => "normal",
        Mode::Insert => "typing",
    };

    let line = Line::from(vec![
        Span::styled(" zen", theme.title()),
        Span::styled("vibe ", theme.accent()),
        Span::styled("~ a safe space to share  ", theme.muted()),
        Span::styled("| AI: ", theme.muted()),
        backend,
        Span::styled("  | Mode: ", theme.muted()),
        Span::styled(mode_str, theme.accent()),
    ]);

    let header = Paragraph::new(line).style(theme.base()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border()),
    );
    frame.render_widget(header, area);
}

fn render_tabs(frame: &mut Frame, app: &mut App, area: Rect) {
    let theme = &app.theme;

    let titles: Vec<Line> = app
        .nav
        .render(app.tab)
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            let style = if item.is_active {
                theme.selected().fg(theme.accent)
            } else {
                theme.muted()
            };
            Line::styled(
                format!(" {} {} {} ", i + 1, item.tab.icon(), item.label),
                style,
            )
        })
        .collect();

    let tabs = Tabs::new(titles)
        .select(app.tab.index())
        .style(theme.base())
        .highlight_style(theme.selected().fg(theme.accent))
        .divider(Span::styled("|", theme.border()))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border()),
        );

    frame.render_widget(tabs, area);
}

fn render_content(frame: &mut Frame, app: &mut App, area: Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(area);

    match app.tab {
        Tab::Discussion => render_discussion(frame, app, cols[0]),
        Tab::Chatbot => render_chatbot(frame, app, cols[0]),
        Tab::Resources => render_resources(frame, app, cols[0]),
        Tab::Help => render_help(frame, app, cols[0]),
    }

    render_logs(frame, app, cols[1]);
}

fn compose_split(area: Rect) -> (Rect, Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(area);
    (rows[0], rows[1], rows[2])
}

fn render_discussion(frame: &mut Frame, app: &mut App, area: Rect) {
    let (feed_area, compose_area, notice_area) = compose_split(area);
    let theme = &app.theme;

    let block = Block::default()
        .title(Span::styled(" Community feed ", theme.title()))
        .borders(Borders::ALL)
        .border_style(theme.border())
        .style(theme.base());

    let mut lines: Vec<Line> = Vec::new();
    if app.posts.is_empty() {
        lines.push(Line::styled(
            "nothing here yet. press 'i' to share how you're doing.",
            theme.muted(),
        ));
    }

    for post in &app.posts {
        lines.push(Line::from(vec![
            Span::styled(format!("@{}", post.author), theme.accent()),
            Span::styled(
                format!("  {}", post.posted_at.format("%H:%M")),
                theme.muted(),
            ),
        ]));
        for l in post.content.lines() {
            lines.push(Line::styled(l.to_string(), theme.base()));
        }
        for reply in &post.replies {
            lines.push(Line::from(vec![
                Span::styled("  ↳ ", theme.border()),
                Span::styled(format!("@{} ", reply.author), theme.success()),
                Span::styled(reply.posted_at.format("%H:%M").to_string(), theme.muted()),
            ]));
            lines.push(Line::styled(format!("    {}", reply.content), theme.base()));
        }
        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(theme.base())
        .wrap(Wrap { trim: false })
        .scroll((app.feed_scroll as u16, 0));
    frame.render_widget(paragraph, feed_area);

    render_compose(frame, app, compose_area, " Share something ");
    render_notice(frame, app, notice_area);
}

fn render_chatbot(frame: &mut Frame, app: &mut App, area: Rect) {
    let (chat_area, compose_area, notice_area) = compose_split(area);
    let theme = &app.theme;

    let block = Block::default()
        .title(Span::styled(" Talk to ZenBot ", theme.title()))
        .borders(Borders::ALL)
        .border_style(theme.border())
        .style(theme.base());

    let mut lines: Vec<Line> = vec![Line::styled(
        "ZenBot listens. it's not a therapist, but it's here for you.",
        theme.muted(),
    )];
    lines.push(Line::from(""));

    for entry in &app.chat {
        let (who, style) = match entry.speaker {
            Speaker::You => ("you", theme.accent()),
            Speaker::Bot => ("zenbot", theme.success()),
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{who}: "), style),
            Span::styled(entry.text.clone(), theme.base()),
        ]));
    }

    if app.loading {
        lines.push(Line::styled("zenbot is typing...", theme.muted()));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(theme.base())
        .wrap(Wrap { trim: false })
        .scroll((app.feed_scroll as u16, 0));
    frame.render_widget(paragraph, chat_area);

    render_compose(frame, app, compose_area, " Message ");
    render_notice(frame, app, notice_area);
}

fn render_compose(frame: &mut Frame, app: &mut App, area: Rect, title: &str) {
    let theme = &app.theme;
    let typing = app.mode == Mode::Insert;

    let block = Block::default()
        .title(Span::styled(title.to_string(), theme.title()))
        .borders(Borders::ALL)
        .border_style(if typing { theme.accent() } else { theme.border() })
        .style(theme.base());

    let content = if app.loading {
        Line::styled("checking your message...", theme.muted())
    } else if app.input.is_empty() && !typing {
        Line::styled("press 'i' to start typing", theme.muted())
    } else {
        Line::styled(app.input.clone(), theme.base())
    };

    frame.render_widget(Paragraph::new(content).block(block), area);

    // real terminal cursor while typing
    if typing {
        let inner = area.inner(Margin {
            horizontal: 1,
            vertical: 1,
        });
        let col = app.input[..app.cursor].chars().count() as u16;
        frame.set_cursor_position((inner.x + col.min(inner.width.saturating_sub(1)), inner.y));
    }
}

fn render_notice(frame: &mut Frame, app: &mut App, area: Rect) {
    let theme = &app.theme;
    let Some((level, message)) = &app.notice else {
        return;
    };
    let line = Line::styled(format!(" {message}"), level_style(theme, *level));
    frame.render_widget(Paragraph::new(line).style(theme.base()), area);
}

fn render_resources(frame: &mut Frame, app: &mut App, area: Rect) {
    let theme = &app.theme;

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let mut lines: Vec<Line> = Vec::new();
    for r in RESOURCES {
        lines.push(Line::styled(format!("• {}", r.title), theme.accent()));
        lines.push(Line::styled(format!("  {}", r.description), theme.base()));
    }
    let list = Paragraph::new(lines)
        .block(
            Block::default()
                .title(Span::styled(" Coping toolkit ", theme.title()))
                .borders(Borders::ALL)
                .border_style(theme.border()),
        )
        .style(theme.base())
        .wrap(Wrap { trim: false });
    frame.render_widget(list, rows[0]);

    let mut quiz: Vec<Line> = Vec::new();
    match app.quiz.current() {
        Some(question) => {
            quiz.push(Line::styled(
                format!("question {} of {}", app.quiz.position() + 1, QUESTIONS.len()),
                theme.muted(),
            ));
            quiz.push(Line::from(""));
            quiz.push(Line::styled(question, theme.base()));
            quiz.push(Line::from(""));
            quiz.push(Line::from(vec![
                Span::styled("[y]", theme.accent()),
                Span::styled(" that's me   ", theme.muted()),
                Span::styled("[n]", theme.accent()),
                Span::styled(" not really", theme.muted()),
            ]));
        }
        None => {
            quiz.push(Line::styled(
                format!("your score: {}/10", app.quiz.score()),
                theme.accent(),
            ));
            quiz.push(Line::from(""));
            match &app.quiz_feedback {
                Some(feedback) => quiz.push(Line::styled(feedback.clone(), theme.base())),
                None => quiz.push(Line::styled("thinking about your answers...", theme.muted())),
            }
            quiz.push(Line::from(""));
            quiz.push(Line::from(vec![
                Span::styled("[r]", theme.accent()),
                Span::styled(" take it again", theme.muted()),
            ]));
        }
    }

    let panel = Paragraph::new(quiz)
        .block(
            Block::default()
                .title(Span::styled(" Stress check ", theme.title()))
                .borders(Borders::ALL)
                .border_style(theme.border()),
        )
        .style(theme.base())
        .wrap(Wrap { trim: false });
    frame.render_widget(panel, rows[1]);
}

fn helpline_lines(theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for h in HELPLINES {
        lines.push(Line::styled(h.name, theme.accent()));
        lines.push(Line::from(vec![
            Span::styled(format!("  {}", h.contact), theme.base()),
            Span::styled(format!("  ({})", h.hours), theme.muted()),
        ]));
    }
    lines
}

fn render_help(frame: &mut Frame, app: &mut App, area: Rect) {
    let theme = &app.theme;

    let mut lines = vec![
        Line::styled("If you are in danger right now, call emergency services.", theme.error()),
        Line::from(""),
    ];
    lines.extend(helpline_lines(theme));
    lines.push(Line::from(""));
    lines.push(Line::styled(
        "talking to a trusted adult, teacher or school counselor also helps.",
        theme.muted(),
    ));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(Span::styled(" Get help now ", theme.title()))
                .borders(Borders::ALL)
                .border_style(theme.border()),
        )
        .style(theme.base())
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn level_style(theme: &Theme, level: LogLevel) -> ratatui::style::Style {
    match level {
        LogLevel::Ok => theme.success(),
        LogLevel::Info => theme.muted(),
        LogLevel::Warn => theme.warning(),
        LogLevel::Error => theme.error(),
    }
}

fn render_logs(frame: &mut Frame, app: &mut App, area: Rect) {
    let theme = &app.theme;

    let block = Block::default()
        .title(Span::styled(" Activity ", theme.title()))
        .borders(Borders::ALL)
        .border_style(theme.border())
        .style(theme.base());

    // keep the newest lines in view
    let visible = area.height.saturating_sub(2) as usize;
    let skip = app.logs.len().saturating_sub(visible);

    let lines: Vec<Line> = app
        .logs
        .iter()
        .skip(skip)
        .map(|entry| {
            let prefix = match entry.level {
                LogLevel::Ok => "[OK]",
                LogLevel::Info => "[--]",
                LogLevel::Warn => "[!!]",
                LogLevel::Error => "[ERR]",
            };
            Line::from(vec![
                Span::styled(format!("{prefix} "), level_style(theme, entry.level)),
                Span::styled(entry.message.clone(), theme.base()),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(theme.base())
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn render_footer(frame: &mut Frame, app: &mut App, area: Rect) {
    let theme = &app.theme;

    let mut parts = vec![
        Span::styled(" 1-4 ", theme.base().bg(theme.accent).fg(theme.bg)),
        Span::styled(" Tabs ", theme.muted()),
        Span::styled("| ", theme.border()),
    ];

    match app.tab {
        Tab::Discussion | Tab::Chatbot => parts.extend([
            Span::styled("i ", theme.accent()),
            Span::styled("Type ", theme.muted()),
            Span::styled("Enter ", theme.accent()),
            Span::styled("Send ", theme.muted()),
            Span::styled("Esc ", theme.accent()),
            Span::styled("Stop typing ", theme.muted()),
            Span::styled("| ", theme.border()),
        ]),
        Tab::Resources => parts.extend([
            Span::styled("y/n ", theme.accent()),
            Span::styled("Answer ", theme.muted()),
            Span::styled("r ", theme.accent()),
            Span::styled("Restart ", theme.muted()),
            Span::styled("| ", theme.border()),
        ]),
        Tab::Help => {}
    }

    parts.extend([
        Span::styled("t/T ", theme.accent()),
        Span::styled("Theme ", theme.muted()),
        Span::styled("| ", theme.border()),
        Span::styled("q ", theme.accent()),
        Span::styled("Quit ", theme.muted()),
    ]);

    let paragraph = Paragraph::new(Line::from(parts))
        .style(theme.base())
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn render_theme_popup(frame: &mut Frame, app: &mut App) {
    let theme = &app.theme;
    let area = centered_rect(36, 50, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(Span::styled(" select theme ", theme.title()))
        .borders(Borders::ALL)
        .border_style(theme.accent())
        .style(theme.base());

    let mut lines: Vec<Line> = ThemeKind::ALL
        .iter()
        .enumerate()
        .map(|(i, &kind)| {
            let name = kind.name();
            if i == app.theme_scroll {
                Line::from(vec![
                    Span::styled(" > ", theme.accent()),
                    Span::styled(name, theme.selected().fg(theme.accent)),
                ])
            } else {
                Line::styled(format!("   {name}"), theme.base())
            }
        })
        .collect();

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(" j/k ", theme.accent()),
        Span::styled("navigate  ", theme.muted()),
        Span::styled("esc ", theme.accent()),
        Span::styled("close", theme.muted()),
    ]));

    frame.render_widget(Paragraph::new(lines).block(block).style(theme.base()), area);
}

fn render_crisis_popup(frame: &mut Frame, app: &mut App) {
    let theme = &app.theme;
    let area = centered_rect(70, 60, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(Span::styled(" you matter ", theme.title()))
        .borders(Borders::ALL)
        .border_style(theme.error())
        .style(theme.base());

    let mut lines = vec![Line::styled(CRISIS_MESSAGE, theme.base()), Line::from("")];
    lines.extend(helpline_lines(theme));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(" enter ", theme.accent()),
        Span::styled("close", theme.muted()),
    ]));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(theme.base())
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
