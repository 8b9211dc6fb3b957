// terminal ui - the controller that owns the active tab and calls the gateway

mod app;
mod event;
mod theme;
mod ui;

pub use app::App;

use crossterm::{
    cursor::SetCursorStyle,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, stdout};
use std::time::Duration;

use crate::Error;
use crate::core::Gateway;
use app::{LogLevel, Mode, Speaker};
use event::{Action, handle_event, poll_event};

type Term = Terminal<CrosstermBackend<io::Stdout>>;

pub async fn run(gateway: Gateway) -> Result<(), Error> {
    // setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &gateway).await;

    // restore terminal
    disable_raw_mode().ok();
    execute!(
        terminal.backend_mut(),
        SetCursorStyle::DefaultUserShape,
        LeaveAlternateScreen
    )
    .ok();
    terminal.show_cursor().ok();

    result
}

fn draw(terminal: &mut Term, app: &mut App) -> Result<(), Error> {
    terminal.draw(|frame| ui::render(frame, app))?;
    Ok(())
}

async fn run_app(terminal: &mut Term, gateway: &Gateway) -> Result<(), Error> {
    let backend = gateway
        .backend()
        .map(|(provider, model)| format!("{provider} ({model})"));
    let mut app = App::new(backend);
    let mut last_mode = app.mode;

    loop {
        if app.mode != last_mode {
            let cursor_style = match app.mode {
                Mode::Insert => SetCursorStyle::BlinkingBar,
                Mode::Normal => SetCursorStyle::BlinkingBlock,
            };
            execute!(terminal.backend_mut(), cursor_style).ok();
            last_mode = app.mode;
        }

        draw(terminal, &mut app)?;

        let Some(event) = poll_event(Duration::from_millis(100))? else {
            continue;
        };

        match handle_event(&mut app, event) {
            Action::Quit => break,
            Action::SubmitPost(text) => {
                if moderate(terminal, &mut app, gateway, &text).await? {
                    app.add_post(text.clone());
                    app.loading = true;
                    draw(terminal, &mut app)?;

                    let reply = gateway.generate_supportive_reply(&text).await;
                    app.loading = false;
                    app.add_reply(reply);
                }
            }
            Action::SubmitChat(text) => {
                app.push_chat(Speaker::You, text.clone());
                if moderate(terminal, &mut app, gateway, &text).await? {
                    app.loading = true;
                    draw(terminal, &mut app)?;

                    let reply = gateway.generate_supportive_reply(&text).await;
                    app.loading = false;
                    app.push_chat(Speaker::Bot, reply);
                } else {
                    // rejected messages don't stay in the transcript
                    app.chat.pop();
                }
            }
            Action::QuizComplete(score) => {
                app.loading = true;
                draw(terminal, &mut app)?;

                let feedback = gateway.get_quiz_feedback(score).await;
                app.loading = false;
                app.quiz_feedback = Some(feedback);
            }
            Action::None => {}
        }
    }

    Ok(())
}

// runs the moderation gate and applies the verdict; true when the text may be shown
async fn moderate(
    terminal: &mut Term,
    app: &mut App,
    gateway: &Gateway,
    text: &str,
) -> Result<bool, Error> {
    app.loading = true;
    app.log(LogLevel::Info, "checking message...".to_string());
    draw(terminal, app)?;

    let verdict = gateway.moderate_content(text).await;
    app.loading = false;
    Ok(app.apply_verdict(text, &verdict))
}
