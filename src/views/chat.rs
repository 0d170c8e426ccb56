use crate::assistant::ReplyTimer;
use crate::chat::ChatMessage;
use crate::markup::{ReplyLine, reply_lines};
use crate::recommend::SUGGESTED_PROMPTS;
use crate::types::Role;
use crate::ui::use_app_state;
use dioxus::prelude::*;
use futures::StreamExt;

fn role_class(role: Role) -> &'static str {
    match role {
        Role::User => "user",
        Role::Assistant => "assistant",
    }
}

fn role_avatar(role: Role) -> &'static str {
    match role {
        Role::User => "🧑",
        Role::Assistant => "🤖",
    }
}

fn line_parts(line: ReplyLine) -> (&'static str, String) {
    match line {
        ReplyLine::Emphasis(text) => ("line emphasis", text),
        ReplyLine::Plain(text) => ("line", text),
    }
}

#[component]
pub fn ChatView() -> Element {
    let mut app = use_app_state();
    let mut input = use_signal(String::new);
    let mut typing = use_signal(|| false);

    // Owns the reply timer; dropping the coroutine with the view aborts a pending reply.
    let assistant = use_coroutine(move |mut prompts: UnboundedReceiver<String>| async move {
        let (delay, catalog) = {
            let state = app.peek();
            (state.config.reply_delay, state.catalog.clone())
        };
        let (mut reply_timer, mut replies) = ReplyTimer::new(delay, catalog);
        loop {
            tokio::select! {
                Some(prompt) = prompts.next() => reply_timer.schedule(prompt),
                Some(reply) = replies.recv() => {
                    if !reply_timer.is_current(&reply) {
                        tracing::debug!(prompt = %reply.prompt, "dropping superseded reply");
                        continue;
                    }
                    app.write().receive_reply(reply);
                    typing.set(false);
                }
                else => break,
            }
        }
    });

    let mut send_message = move || {
        let text = input();
        if app.write().submit_user_message(&text).is_none() {
            return;
        }
        input.set(String::new());
        typing.set(true);
        assistant.send(text);
    };

    let messages = app.read().chat.all().to_vec();

    rsx! {
        div { class: "main-container chat-page",
            div { class: "chat-header",
                div { class: "chat-header-icon", "🤖" }
                h1 { "AI Recipe Assistant" }
                p { "Tell me what's in your fridge and I'll suggest recipes!" }
            }
            div { class: "chat-list",
                if messages.is_empty() {
                    div { class: "chat-welcome",
                        div { class: "empty-icon", "🤖" }
                        p { class: "text-secondary", "Hi! I'm your Nigerian recipe assistant" }
                        p { class: "text-muted",
                            "Tell me what ingredients you have, and I'll recommend the perfect Nigerian dish for you!"
                        }
                        p { class: "suggestion-heading", "Try asking:" }
                        for prompt in SUGGESTED_PROMPTS {
                            button {
                                key: "{prompt}",
                                class: "suggestion",
                                r#type: "button",
                                onclick: move |_| input.set(prompt.to_string()),
                                "\"{prompt}\""
                            }
                        }
                    }
                }
                for message in messages {
                    MessageRow { key: "{message.id}", message: message.clone() }
                }
                if typing() {
                    div { class: "message-row assistant",
                        div { class: "avatar assistant", "🤖" }
                        div { class: "bubble assistant typing-indicator",
                            span { class: "dot" }
                            span { class: "dot" }
                            span { class: "dot" }
                        }
                    }
                }
            }
            form {
                class: "composer",
                onsubmit: move |ev| {
                    ev.prevent_default();
                    send_message();
                },
                input {
                    r#type: "text",
                    placeholder: "What ingredients do you have?",
                    value: "{input}",
                    oninput: move |ev| input.set(ev.value()),
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: input().trim().is_empty(),
                    "Send"
                }
            }
        }
    }
}

#[component]
fn MessageRow(message: ChatMessage) -> Element {
    let class = role_class(message.role);
    let avatar = role_avatar(message.role);
    let time = message.display_time();
    let lines = reply_lines(&message.content);

    rsx! {
        div { class: format_args!("message-row {}", class),
            div { class: format_args!("avatar {}", class), "{avatar}" }
            div { class: "message-stack",
                div { class: format_args!("bubble {}", class),
                    for (index, (line_class, text)) in lines.into_iter().map(line_parts).enumerate() {
                        div { key: "{index}", class: line_class, "{text}" }
                    }
                }
                div { class: "message-meta",
                    span { class: "message-timestamp", "{time}" }
                }
            }
        }
    }
}
