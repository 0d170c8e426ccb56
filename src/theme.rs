use crate::types::ThemeMode;

pub struct ThemeDefinition {
    pub css: &'static str,
    pub root_class: &'static str,
    pub toggle_label: &'static str,
}

pub fn theme_definition(mode: ThemeMode) -> ThemeDefinition {
    match mode {
        ThemeMode::Light => ThemeDefinition {
            css: LIGHT_THEME,
            root_class: "app-root",
            toggle_label: "Dark mode",
        },
        ThemeMode::Dark => ThemeDefinition {
            css: DARK_THEME,
            root_class: "app-root dark",
            toggle_label: "Light mode",
        },
    }
}

const LIGHT_THEME: &str = r#"
:root {
    --color-bg-primary: #fff7ed;
    --color-bg-secondary: #ffffff;
    --color-surface-muted: #f3f4f6;
    --color-text-primary: #111827;
    --color-text-secondary: #4b5563;
    --color-text-muted: #6b7280;
    --color-border: #e5e7eb;
    --color-accent: #ea580c;
    --color-accent-strong: #c2410c;
    --color-header-from: #ea580c;
    --color-header-to: #dc2626;
    --color-chat-user-bg: #ea580c;
    --color-chat-user-text: #ffffff;
    --color-chat-assistant-bg: #ffffff;
    --color-chat-assistant-text: #111827;
    --color-snackbar-bg: #4ade80;
    --color-timestamp: #6b7280;
}
body { background: var(--color-bg-primary); color: var(--color-text-primary); }
"#;

const DARK_THEME: &str = r#"
:root {
    --color-bg-primary: #111111;
    --color-bg-secondary: #1c1c1c;
    --color-surface-muted: #262626;
    --color-text-primary: #f5f5f5;
    --color-text-secondary: #d4d4d4;
    --color-text-muted: #a3a3a3;
    --color-border: #333333;
    --color-accent: #f97316;
    --color-accent-strong: #ea580c;
    --color-header-from: #c2410c;
    --color-header-to: #b91c1c;
    --color-chat-user-bg: #c2410c;
    --color-chat-user-text: #ffffff;
    --color-chat-assistant-bg: #1c1c1c;
    --color-chat-assistant-text: #f5f5f5;
    --color-snackbar-bg: #16a34a;
    --color-timestamp: #a3a3a3;
}
body { background: var(--color-bg-primary); color: var(--color-text-primary); }
"#;
