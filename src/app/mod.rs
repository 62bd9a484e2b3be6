use crate::pages::NoteBoard;
use crate::state::{AppContext, AppState};
use crate::theme::DARK_MODE_CLASS;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let app_state = AppState::new();
    provide_context(AppContext(app_state));

    // The theme lives on <body>, outside the mounted view.
    Effect::new(move |_| {
        let theme = app_state.current_theme();
        if let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        {
            let dark = theme.body_class().is_some();
            let classes = body.class_list();
            let _ = classes.toggle_with_force(DARK_MODE_CLASS, dark);
            // Tailwind `dark:` variants.
            let _ = classes.toggle_with_force("dark", dark);
        }
    });

    view! { <NoteBoard /> }
}
