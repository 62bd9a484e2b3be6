use crate::components::ui::{Button, ButtonSize, ButtonVariant, Input};
use crate::editor::{EditOutcome, EditSession, Modifiers};
use crate::models::{NoteEntry, NoteId};
use crate::state::AppContext;
use leptos::html;
use leptos::prelude::*;
use tw_merge::tw_merge;

#[component]
pub fn NoteBoard() -> impl IntoView {
    let app_state = expect_context::<AppContext>();

    view! {
        <div class="mx-auto flex min-h-screen max-w-5xl flex-col gap-6 px-4 py-8">
            <header class="flex items-center justify-between gap-4">
                <h1 class="text-xl font-semibold">"Notes"</h1>
                <ThemeToggle />
            </header>

            <NoteComposer />

            <Show when=move || app_state.0.last_error.get().is_some() fallback=|| ().into_view()>
                <p class="text-xs text-destructive">
                    {move || app_state.0.last_error.get().unwrap_or_default()}
                </p>
            </Show>

            <div data-name="NotesContainer" class="grid grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-3">
                <For
                    each=move || app_state.0.entries()
                    key=|entry: &NoteEntry| entry.id
                    children=move |entry: NoteEntry| view! { <NoteCard id=entry.id /> }
                />
            </div>
        </div>
    }
}

#[component]
pub fn NoteComposer() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let draft = app_state.0.draft;

    view! {
        <div class="flex items-center gap-2">
            <Input
                id="new-note-input"
                bind_value=draft
                placeholder="Write a note…"
                class="h-10 min-w-0 flex-1"
                autofocus=true
            />
            <Button
                attr:id="add-note-button"
                attr:disabled=move || !app_state.0.can_add()
                on:click=move |_| app_state.0.on_add_requested()
            >
                "Add note"
            </Button>
        </div>
    }
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let app_state = expect_context::<AppContext>();

    view! {
        <Button
            variant=ButtonVariant::Outline
            size=ButtonSize::Sm
            attr:id="toggle-theme-button"
            on:click=move |_| app_state.0.on_theme_toggle_requested()
        >
            {move || app_state.0.current_theme().toggle_label()}
        </Button>
    }
}

/// One note on the board: text plus delete affordance, or an edit textarea.
#[component]
pub fn NoteCard(id: NoteId) -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let session: RwSignal<EditSession> = RwSignal::new(EditSession::new());
    let textarea_ref: NodeRef<html::Textarea> = NodeRef::new();

    let color = app_state.0.note_color(id).unwrap_or_default();
    let card_class = tw_merge!(
        "note relative min-h-24 rounded-lg p-4 pr-8 text-sm shadow-sm transition-shadow hover:shadow-lg",
        color.class_name(),
        color.surface_classes()
    );

    let is_editing = move || session.with(|s| s.is_editing());
    let shows_delete = move || session.with(|s| s.shows_delete());
    let text = move || app_state.0.note_text(id).unwrap_or_default();

    let finish = move |outcome: EditOutcome| {
        if let EditOutcome::Committed(text) = outcome {
            app_state.0.on_edit_committed(id, &text);
        }
    };

    // Focus the textarea once it is mounted.
    Effect::new(move |_| {
        if is_editing() {
            if let Some(el) = textarea_ref.get() {
                let _ = el.focus();
            }
        }
    });

    let on_dblclick = move |_| {
        let Some(current) = app_state.0.note_text_untracked(id) else {
            return;
        };
        session.update(|s| {
            s.begin(&current);
        });
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        let key = ev.key();
        let modifiers = Modifiers {
            shift: ev.shift_key(),
            ctrl: ev.ctrl_key(),
            alt: ev.alt_key(),
            meta: ev.meta_key(),
        };
        if key == "Enter" && !modifiers.any() {
            // Commit instead of inserting a newline.
            ev.prevent_default();
        }
        let outcome = session
            .try_update(|s| s.key_down(&key, modifiers))
            .unwrap_or(EditOutcome::Ignored);
        finish(outcome);
    };

    let on_blur = move |_| {
        let outcome = session
            .try_update(|s| s.blur())
            .unwrap_or(EditOutcome::Ignored);
        finish(outcome);
    };

    view! {
        <div data-name="NoteCard" class=card_class on:dblclick=on_dblclick>
            <Show when=move || !is_editing() fallback=|| ().into_view()>
                <p class="whitespace-pre-wrap break-words">{text}</p>
            </Show>

            <Show when=is_editing fallback=|| ().into_view()>
                <textarea
                    node_ref=textarea_ref
                    class="min-h-20 w-full resize-none rounded-md bg-white/60 p-2 text-sm outline-none"
                    prop:value=move || session.with(|s| s.buffer().unwrap_or_default().to_string())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        session.update(|s| {
                            s.input(&value);
                        });
                    }
                    on:keydown=on_keydown
                    on:blur=on_blur
                />
            </Show>

            <Show when=shows_delete fallback=|| ().into_view()>
                <Button
                    variant=ButtonVariant::Ghost
                    size=ButtonSize::Icon
                    class="delete-btn absolute right-1 top-1 text-xs"
                    attr:title="Delete"
                    on:click=move |ev: web_sys::MouseEvent| {
                        ev.stop_propagation();
                        app_state.0.on_delete_requested(id);
                    }
                >
                    "x"
                </Button>
            </Show>
        </div>
    }
}
