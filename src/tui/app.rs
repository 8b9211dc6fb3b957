// app state for the tui

use chrono::{DateTime, Local};

use crate::core::ModerationResult;
use crate::core::quiz::Quiz;
use crate::nav::{NavEvent, Navigation, Tab};
use crate::tui::theme::{Theme, ThemeKind, detect_theme};

pub const BOT_NAME: &str = "ZenBot";
pub const USER_NAME: &str = "you";

// the log panel only shows the tail, so older lines are dropped
pub const MAX_LOGS: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Insert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Popup {
    None,
    Themes,
    Crisis,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Ok,
    Info,
    Warn,
    Error,
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct Reply {
    pub author: String,
    pub content: String,
    pub posted_at: DateTime<Local>,
}

#[derive(Debug, Clone)]
pub struct Post {
    pub author: String,
    pub content: String,
    pub posted_at: DateTime<Local>,
    pub replies: Vec<Reply>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    You,
    Bot,
}

#[derive(Debug, Clone)]
pub struct ChatLine {
    pub speaker: Speaker,
    pub text: String,
}

pub struct App {
    pub mode: Mode,
    pub popup: Popup,
    pub tab: Tab,
    pub nav: Navigation,
    pub theme_kind: ThemeKind,
    pub theme: Theme,
    pub theme_scroll: usize,

    // which model we're talking to, if any
    pub backend: Option<String>,

    // compose box
    pub input: String,
    pub cursor: usize,

    // discussion
    pub posts: Vec<Post>,
    pub feed_scroll: usize,

    // chatbot
    pub chat: Vec<ChatLine>,

    // resources
    pub quiz: Quiz,
    pub quiz_feedback: Option<String>,

    // status line shown under the compose box
    pub notice: Option<(LogLevel, String)>,
    pub logs: Vec<LogEntry>,
    pub loading: bool,
}

impl App {
    pub fn new(backend: Option<String>) -> Self {
        Self::with_theme(backend, detect_theme())
    }

    pub fn with_theme(backend: Option<String>, theme_kind: ThemeKind) -> Self {
        let mut app = Self {
            mode: Mode::Normal,
            popup: Popup::None,
            tab: Tab::default(),
            nav: Navigation,
            theme_kind,
            theme: Theme::from_kind(theme_kind),
            theme_scroll: theme_kind.index(),
            backend,
            input: String::new(),
            cursor: 0,
            posts: Vec::new(),
            feed_scroll: 0,
            chat: Vec::new(),
            quiz: Quiz::new(),
            quiz_feedback: None,
            notice: None,
            logs: Vec::new(),
            loading: false,
        };

        match app.backend.clone() {
            Some(backend) => app.log(LogLevel::Ok, format!("ai ready: {backend}")),
            None => app.log(
                LogLevel::Warn,
                "ai unavailable, using fallback messages".to_string(),
            ),
        }

        app
    }

    pub fn log(&mut self, level: LogLevel, message: String) {
        self.logs.push(LogEntry { level, message });
        if self.logs.len() > MAX_LOGS {
            let excess = self.logs.len() - MAX_LOGS;
            self.logs.drain(..excess);
        }
    }

    pub fn set_notice(&mut self, level: LogLevel, message: String) {
        self.log(level, message.clone());
        self.notice = Some((level, message));
    }

    // navigation - the tab bar reports, we decide
    pub fn select_tab(&mut self, tab: Tab) {
        let nav = self.nav;
        nav.select(tab, |NavEvent::TabSelected(selected)| {
            if self.tab != selected {
                self.tab = selected;
                self.feed_scroll = 0;
                self.notice = None;
                self.exit_insert();
            }
        });
    }

    pub fn next_tab(&mut self) {
        self.select_tab(self.tab.next());
    }

    pub fn prev_tab(&mut self) {
        self.select_tab(self.tab.prev());
    }

    /// Only the discussion and chatbot tabs take typed input.
    pub fn can_compose(&self) -> bool {
        matches!(self.tab, Tab::Discussion | Tab::Chatbot)
    }

    // themes
    pub fn set_theme(&mut self, kind: ThemeKind) {
        self.theme_kind = kind;
        self.theme = Theme::from_kind(kind);
    }

    pub fn cycle_theme(&mut self) {
        self.set_theme(self.theme_kind.next());
        self.log(LogLevel::Info, format!("theme: {}", self.theme_kind.name()));
    }

    pub fn open_theme_popup(&mut self) {
        self.theme_scroll = self.theme_kind.index();
        self.popup = Popup::Themes;
    }

    pub fn close_popup(&mut self) {
        self.popup = Popup::None;
    }

    pub fn theme_scroll_up(&mut self) {
        if self.theme_scroll > 0 {
            self.theme_scroll -= 1;
            self.set_theme(ThemeKind::ALL[self.theme_scroll]);
        }
    }

    pub fn theme_scroll_down(&mut self) {
        if self.theme_scroll < ThemeKind::ALL.len() - 1 {
            self.theme_scroll += 1;
            self.set_theme(ThemeKind::ALL[self.theme_scroll]);
        }
    }

    // compose box editing; cursor is a byte offset on a char boundary
    pub fn enter_insert(&mut self) {
        if self.can_compose() {
            self.mode = Mode::Insert;
        }
    }

    pub fn exit_insert(&mut self) {
        self.mode = Mode::Normal;
    }

    pub fn insert_char(&mut self, c: char) {
        self.input.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_char(&mut self) {
        if let Some(c) = self.input[..self.cursor].chars().next_back() {
            self.cursor -= c.len_utf8();
            self.input.remove(self.cursor);
        }
    }

    pub fn delete_char_forward(&mut self) {
        if self.cursor < self.input.len() {
            self.input.remove(self.cursor);
        }
    }

    pub fn move_cursor_left(&mut self) {
        if let Some(c) = self.input[..self.cursor].chars().next_back() {
            self.cursor -= c.len_utf8();
        }
    }

    pub fn move_cursor_right(&mut self) {
        if let Some(c) = self.input[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    pub fn move_cursor_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor = self.input.len();
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
        self.cursor = 0;
    }

    /// Takes the compose box contents, leaving it empty.
    pub fn submit(&mut self) -> Option<String> {
        let text = self.input.trim().to_string();
        if text.is_empty() || self.loading {
            return None;
        }
        self.clear_input();
        self.notice = None;
        Some(text)
    }

    // moderation outcome, shared by the feed and the chatbot.
    // returns true when the text may be shown.
    pub fn apply_verdict(&mut self, text: &str, verdict: &ModerationResult) -> bool {
        if verdict.is_severe {
            self.log(LogLevel::Warn, "severe risk flagged, showing help".to_string());
            self.select_tab(Tab::Help);
            self.popup = Popup::Crisis;
            return false;
        }

        if !verdict.is_positive {
            // give the draft back so it can be reworded
            self.input = text.to_string();
            self.cursor = self.input.len();
            self.set_notice(LogLevel::Warn, verdict.reason.clone());
            return false;
        }

        true
    }

    pub fn add_post(&mut self, content: String) {
        self.posts.insert(
            0,
            Post {
                author: USER_NAME.to_string(),
                content,
                posted_at: Local::now(),
                replies: Vec::new(),
            },
        );
        self.feed_scroll = 0;
        self.log(LogLevel::Ok, "post shared".to_string());
    }

    /// Attaches a reply to the newest post.
    pub fn add_reply(&mut self, content: String) {
        if let Some(post) = self.posts.first_mut() {
            post.replies.push(Reply {
                author: BOT_NAME.to_string(),
                content,
                posted_at: Local::now(),
            });
        }
    }

    pub fn push_chat(&mut self, speaker: Speaker, text: String) {
        self.chat.push(ChatLine { speaker, text });
    }

    // quiz; returns the score once the last question is answered
    pub fn answer_quiz(&mut self, agree: bool) -> Option<f64> {
        if self.tab != Tab::Resources || !self.quiz.answer(agree) {
            return None;
        }
        if self.quiz.is_complete() {
            let score = self.quiz.score();
            self.log(LogLevel::Info, format!("quiz finished, score {score}/10"));
            Some(score)
        } else {
            None
        }
    }

    pub fn restart_quiz(&mut self) {
        self.quiz.reset();
        self.quiz_feedback = None;
    }

    pub fn scroll_down(&mut self) {
        self.feed_scroll = self.feed_scroll.saturating_add(1);
    }

    pub fn scroll_up(&mut self) {
        self.feed_scroll = self.feed_scroll.saturating_sub(1);
    }
}
