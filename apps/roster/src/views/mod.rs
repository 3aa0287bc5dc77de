//! Server-rendered HTML for the four views.
//!
//! Every response is a complete page: navigation, the current view's
//! heading, its notices for this render only, and the view body.

pub mod students;

use std::fmt::Write;

/// One of the four mutually exclusive UI modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    List,
    Add,
    Update,
    Delete,
}

impl View {
    pub const ALL: [View; 4] = [View::List, View::Add, View::Update, View::Delete];

    pub fn href(self) -> &'static str {
        match self {
            View::List => "/students",
            View::Add => "/students/new",
            View::Update => "/students/edit",
            View::Delete => "/students/delete",
        }
    }

    pub fn nav_label(self) -> &'static str {
        match self {
            View::List => "View All",
            View::Add => "Add Student",
            View::Update => "Update Student",
            View::Delete => "Delete Student",
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            View::List => "View All Students",
            View::Add => "Add New Student",
            View::Update => "Update Student Record",
            View::Delete => "Delete Student Record",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
    Info,
    Warning,
}

impl NoticeLevel {
    pub fn css_class(self) -> &'static str {
        match self {
            NoticeLevel::Success => "success",
            NoticeLevel::Error => "error",
            NoticeLevel::Info => "info",
            NoticeLevel::Warning => "warning",
        }
    }
}

/// A transient message shown in a single response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }
    pub fn success(text: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, text)
    }
    pub fn error(text: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, text)
    }
    pub fn info(text: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, text)
    }
    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Warning, text)
    }

    fn render(&self) -> String {
        format!(
            r#"<div class="notice notice-{}">{}</div>"#,
            self.level.css_class(),
            escape(&self.text)
        )
    }
}

/// A full page for one view.
#[derive(Debug, Clone)]
pub struct Page {
    view: View,
    notices: Vec<Notice>,
    body: String,
}

impl Page {
    pub fn new(view: View) -> Self {
        Self {
            view,
            notices: Vec::new(),
            body: String::new(),
        }
    }

    pub fn push_notice(&mut self, notice: Notice) {
        self.notices.push(notice);
    }

    pub fn push_body(&mut self, html: &str) {
        self.body.push_str(html);
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn render(&self) -> String {
        let mut html = String::with_capacity(4096);
        let _ = write!(
            html,
            concat!(
                "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n",
                "<meta charset=\"utf-8\">\n",
                "<title>{heading} | Student Management</title>\n",
                "<style>{css}</style>\n",
                "</head>\n<body>\n",
                "<h1>Student Management System</h1>\n<hr>\n",
                "<div class=\"layout\">\n<nav class=\"sidebar\">\n<h2>Navigation</h2>\n<ul>\n",
            ),
            heading = self.view.heading(),
            css = STYLE,
        );
        for view in View::ALL {
            let class = if view == self.view { " class=\"active\"" } else { "" };
            let _ = writeln!(
                html,
                r#"<li><a href="{}"{}>{}</a></li>"#,
                view.href(),
                class,
                view.nav_label()
            );
        }
        let _ = write!(
            html,
            "</ul>\n</nav>\n<main>\n<h2>{}</h2>\n",
            self.view.heading()
        );
        for notice in &self.notices {
            html.push_str(&notice.render());
            html.push('\n');
        }
        html.push_str(&self.body);
        let _ = write!(
            html,
            concat!(
                "\n</main>\n</div>\n<hr>\n",
                "<footer>Student Management System v{version}</footer>\n",
                "</body>\n</html>\n",
            ),
            version = env!("CARGO_PKG_VERSION"),
        );
        html
    }
}

/// Escape text for HTML element content and double-quoted attributes.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

const STYLE: &str = "body{font-family:sans-serif;margin:2rem;color:#222}\
.layout{display:flex;gap:2rem}\
.sidebar{min-width:12rem}\
.sidebar a.active{font-weight:bold}\
main{flex:1}\
table{border-collapse:collapse;width:100%}\
th,td{border:1px solid #ccc;padding:.4rem;text-align:left}\
.notice{padding:.6rem;margin:.5rem 0;border-radius:4px}\
.notice-success{background:#e6f4ea}\
.notice-error{background:#fce8e6}\
.notice-info{background:#e8f0fe}\
.notice-warning{background:#fef7e0}\
form label{display:block;margin:.4rem 0}\
footer{text-align:center;color:gray;font-size:12px}";
