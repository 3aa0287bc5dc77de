#![allow(dead_code)]

use roster::repos::students::{self, Student, StudentFields};
use roster::AppState;

#[ctor::ctor]
fn init_logging() {
    roster_test_support::logging::init();
}

pub fn fields(name: &str, email: &str, phone: &str, age: i32) -> StudentFields {
    StudentFields {
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        age,
    }
}

pub fn ada() -> StudentFields {
    fields("Ada Lovelace", "ada@example.com", "555-0100", 36)
}

pub async fn seed(state: &AppState, f: StudentFields) -> Student {
    students::insert_student(state.db(), &f)
        .await
        .expect("seed insert should succeed")
}
