use std::fmt::Write;

use super::escape;
use crate::repos::students::{Student, StudentOption};
use crate::services::students::{StudentForm, AGE_MAX, AGE_MIN};

/// Table of every student, one `student-row` per record.
pub fn list_table(students: &[Student]) -> String {
    let mut html = String::from(concat!(
        "<table class=\"students\">\n<thead><tr>",
        "<th>ID</th><th>Name</th><th>Email</th><th>Phone</th><th>Age</th>",
        "</tr></thead>\n<tbody>\n",
    ));
    for s in students {
        let age = s.age.map(|a| a.to_string()).unwrap_or_default();
        let _ = writeln!(
            html,
            r#"<tr class="student-row"><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>"#,
            s.id,
            escape(&s.name),
            escape(&s.email),
            escape(&s.phone),
            age
        );
    }
    html.push_str("</tbody>\n</table>\n");
    html
}

/// The Add/Update form, posting to `action`.
pub fn student_form(action: &str, form: &StudentForm, submit_label: &str) -> String {
    let age = if form.age.trim().is_empty() {
        AGE_MIN.to_string()
    } else {
        form.age.clone()
    };
    format!(
        concat!(
            "<form class=\"student-form\" method=\"post\" action=\"{action}\">\n",
            "<label>Full Name <input type=\"text\" name=\"name\" value=\"{name}\" placeholder=\"Enter student name\"></label>\n",
            "<label>Email <input type=\"text\" name=\"email\" value=\"{email}\" placeholder=\"Enter email address\"></label>\n",
            "<label>Phone Number <input type=\"text\" name=\"phone\" value=\"{phone}\" placeholder=\"Enter phone number\"></label>\n",
            "<label>Age <input type=\"number\" name=\"age\" value=\"{age}\" min=\"{min}\" max=\"{max}\" step=\"1\"></label>\n",
            "<button type=\"submit\">{submit}</button>\n",
            "</form>\n",
        ),
        action = escape(action),
        name = escape(&form.name),
        email = escape(&form.email),
        phone = escape(&form.phone),
        age = escape(&age),
        min = AGE_MIN,
        max = AGE_MAX,
        submit = escape(submit_label),
    )
}

/// A GET form whose option values are bare ids.
pub fn selector(target: &str, label: &str, options: &[StudentOption], selected: i64) -> String {
    let mut html = format!(
        "<form class=\"selector\" method=\"get\" action=\"{}\">\n<label>{} <select name=\"id\">\n",
        escape(target),
        escape(label)
    );
    for option in options {
        let mark = if option.id == selected { " selected" } else { "" };
        let _ = writeln!(
            html,
            r#"<option value="{}"{}>{}</option>"#,
            option.id,
            mark,
            escape(&option.label())
        );
    }
    html.push_str("</select></label>\n<button type=\"submit\">Select</button>\n</form>\n");
    html
}

/// Confirm/cancel pair for deleting `student`.
pub fn delete_confirm(student: &Student) -> String {
    format!(
        concat!(
            "<form class=\"delete-confirm\" method=\"post\" action=\"/students/{id}/delete\">\n",
            "<button type=\"submit\" name=\"action\" value=\"confirm\">Confirm Delete</button>\n",
            "<button type=\"submit\" name=\"action\" value=\"cancel\">Cancel</button>\n",
            "</form>\n",
        ),
        id = student.id
    )
}
