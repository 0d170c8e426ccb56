use crate::shopping::{ItemGroup, ItemPatch, NewItem, ShoppingItem, parse_quantity};
use crate::ui::use_app_state;
use dioxus::prelude::*;

#[component]
pub fn ShoppingListView() -> Element {
    let app = use_app_state();
    let mut show_add_form = use_signal(|| false);
    let editing = use_signal(|| Option::<u64>::None);

    let (count, groups) = {
        let state = app.read();
        (state.shopping.len(), state.shopping.group_by_recipe())
    };

    rsx! {
        div { class: "main-container",
            div { class: "page-header",
                div { class: "page-title split",
                    div {
                        h1 { "Shopping List" }
                        p { class: "page-subtitle", "{count} items" }
                    }
                    button {
                        class: "fab",
                        r#type: "button",
                        title: "Add item",
                        onclick: move |_| show_add_form.set(!show_add_form()),
                        "+"
                    }
                }
                if show_add_form() {
                    AddItemForm { show_add_form }
                }
            }
            div { class: "page-body",
                if groups.is_empty() {
                    div { class: "empty-state",
                        div { class: "empty-icon", "🛍" }
                        p { class: "text-secondary", "Your shopping list is empty" }
                        p { class: "text-muted", "Add items manually or from recipe ingredients" }
                        button {
                            class: "btn btn-primary",
                            r#type: "button",
                            onclick: move |_| show_add_form.set(true),
                            "Add First Item"
                        }
                    }
                } else {
                    for group in groups {
                        GroupCard { key: "{group.label}", group: group.clone(), editing }
                    }
                }
            }
        }
    }
}

#[component]
fn AddItemForm(show_add_form: Signal<bool>) -> Element {
    let mut app = use_app_state();
    let mut show_add_form = show_add_form;
    let mut name = use_signal(String::new);
    let mut quantity = use_signal(|| "1".to_string());
    let mut unit = use_signal(String::new);

    let mut submit = move || {
        if name().trim().is_empty() {
            return;
        }
        app.write().shopping.add(
            NewItem::named(name())
                .quantity(parse_quantity(&quantity()))
                .unit(unit()),
        );
        name.set(String::new());
        quantity.set("1".to_string());
        unit.set(String::new());
        show_add_form.set(false);
    };

    rsx! {
        form {
            class: "add-item-form",
            onsubmit: move |ev| {
                ev.prevent_default();
                submit();
            },
            input {
                r#type: "text",
                placeholder: "Item name",
                value: "{name}",
                oninput: move |ev| name.set(ev.value()),
            }
            div { class: "hstack",
                input {
                    r#type: "number",
                    placeholder: "Qty",
                    min: "1",
                    value: "{quantity}",
                    oninput: move |ev| quantity.set(ev.value()),
                }
                input {
                    r#type: "text",
                    placeholder: "Unit",
                    value: "{unit}",
                    oninput: move |ev| unit.set(ev.value()),
                }
            }
            div { class: "hstack",
                button { class: "btn btn-primary", r#type: "submit", "Add Item" }
                button {
                    class: "btn",
                    r#type: "button",
                    onclick: move |_| show_add_form.set(false),
                    "Cancel"
                }
            }
        }
    }
}

#[component]
fn GroupCard(group: ItemGroup, editing: Signal<Option<u64>>) -> Element {
    rsx! {
        div { class: "group-card",
            div { class: "group-card-header",
                h3 { "{group.label}" }
            }
            div { class: "group-card-body",
                for item in group.items.iter().cloned() {
                    ShoppingRow { key: "{item.id}", item: item.clone(), editing }
                }
            }
        }
    }
}

#[component]
fn ShoppingRow(item: ShoppingItem, editing: Signal<Option<u64>>) -> Element {
    let mut app = use_app_state();
    let mut editing = editing;
    let mut edit_name = use_signal(String::new);
    let mut edit_quantity = use_signal(String::new);
    let mut edit_unit = use_signal(String::new);

    let id = item.id;
    let is_editing = editing() == Some(id);
    let amount = item.amount_label();

    let start_editing = {
        let item = item.clone();
        move |_| {
            edit_name.set(item.name.clone());
            edit_quantity.set(item.quantity.to_string());
            edit_unit.set(item.unit.clone());
            editing.set(Some(item.id));
        }
    };

    let save_edit = move |_| {
        app.write().shopping.update(
            id,
            ItemPatch::edit(edit_name(), parse_quantity(&edit_quantity()), edit_unit()),
        );
        editing.set(None);
    };

    rsx! {
        div { class: "shopping-row",
            if is_editing {
                div { class: "shopping-row-edit hstack",
                    input {
                        r#type: "text",
                        value: "{edit_name}",
                        oninput: move |ev| edit_name.set(ev.value()),
                    }
                    input {
                        class: "qty-input",
                        r#type: "number",
                        min: "1",
                        value: "{edit_quantity}",
                        oninput: move |ev| edit_quantity.set(ev.value()),
                    }
                    input {
                        class: "unit-input",
                        r#type: "text",
                        value: "{edit_unit}",
                        oninput: move |ev| edit_unit.set(ev.value()),
                    }
                }
                div { class: "row-actions",
                    button { class: "icon-button confirm", r#type: "button", title: "Save", onclick: save_edit, "✓" }
                    button {
                        class: "icon-button",
                        r#type: "button",
                        title: "Cancel",
                        onclick: move |_| editing.set(None),
                        "✕"
                    }
                }
            } else {
                div { class: "shopping-row-text",
                    div { class: "item-name", "{item.name}" }
                    div { class: "item-amount", "{amount}" }
                }
                div { class: "row-actions",
                    button { class: "icon-button", r#type: "button", title: "Edit", onclick: start_editing, "✎" }
                    button {
                        class: "icon-button danger",
                        r#type: "button",
                        title: "Remove",
                        onclick: move |_| {
                            app.write().shopping.remove(id);
                        },
                        "🗑"
                    }
                }
            }
        }
    }
}
