use leptos::prelude::*;

use crate::components::diagnosis::DiagnosisScreen;
use crate::components::first_aid::FirstAidScreen;
use crate::components::home::HomeScreen;
use crate::components::layout::Layout;
use crate::components::results::ResultsScreen;
use crate::state::{AppState, Screen};

#[component]
pub fn App() -> impl IntoView {
    let state = AppState::new();
    let notice = state.notice;
    let screen = state.screen;
    provide_context(state);

    view! {
        <Layout>
            {move || notice.get().map(|n| {
                let banner_class = n.banner_class();
                view! {
                    <div class=banner_class>
                        <span class="flex-1">{n.text}</span>
                        <button
                            class="font-bold opacity-70 hover:opacity-100"
                            on:click=move |_| notice.set(None)
                        >
                            "\u{2715}"
                        </button>
                    </div>
                }
            })}

            {move || match screen.get() {
                Screen::Home => view! { <HomeScreen /> }.into_any(),
                Screen::Diagnosis => view! { <DiagnosisScreen /> }.into_any(),
                Screen::FirstAid => view! { <FirstAidScreen /> }.into_any(),
                Screen::Results(session) => view! { <ResultsScreen session /> }.into_any(),
            }}
        </Layout>
    }
}
