use tasklist_macros::Action;

#[derive(Action)]
struct NotAnEnum {
    title: String,
}

fn main() {}
