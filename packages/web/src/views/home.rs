//! Home page: credential form, sign-out button and the task board region.

use dioxus::prelude::*;
use ui::{LoginBox, SignOutButton, TaskBoardContainer};

#[component]
pub fn Home() -> Element {
    rsx! {
        div {
            class: "home",
            style: "display: flex; flex-direction: column; align-items: center; gap: 1rem; padding: 2rem;",

            h1 { "Task Boards" }

            LoginBox {}
            SignOutButton {}

            TaskBoardContainer {
                p { "Your task boards will appear here." }
            }
        }

        style {
            r#"
            #login-box {{
                display: flex;
                flex-direction: column;
                gap: 0.75rem;
                width: 100%;
                max-width: 320px;
            }}

            #login-box[hidden], #sign-out[hidden] {{
                display: none;
            }}

            #login-box input {{
                padding: 0.5rem 0.75rem;
                border: 1px solid #d0d0d0;
                border-radius: 4px;
            }}

            #login-box button:disabled {{
                opacity: 0.5;
                cursor: not-allowed;
            }}
            "#
        }
    }
}
