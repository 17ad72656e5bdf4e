use leptos::prelude::*;

use nidaan_core::i18n::{key, translate};

use crate::state::{AppState, Screen};

const STATS: &[(&str, &str)] = &[
    ("10,000+", "Symptoms Analyzed"),
    ("95%", "Accuracy Rate"),
    ("<30s", "Response Time"),
];

#[component]
pub fn HomeScreen() -> impl IntoView {
    let state = expect_context::<AppState>();
    let language = state.language;
    let screen = state.screen;

    let features = [
        (key::HOME_FEATURE_DIAGNOSIS, key::HOME_FEATURE_DIAGNOSIS_DESC, "bg-blue-100 text-blue-600"),
        (key::HOME_FEATURE_FIRST_AID, key::HOME_FEATURE_FIRST_AID_DESC, "bg-red-100 text-red-600"),
        (key::HOME_FEATURE_VOICE, key::HOME_FEATURE_VOICE_DESC, "bg-green-100 text-green-600"),
    ];

    view! {
        <section class="text-center py-16">
            <h1 class="text-4xl md:text-6xl font-bold text-slate-900 dark:text-white mb-6">
                {move || translate(language.get(), key::HOME_TITLE)}
            </h1>
            <p class="text-xl md:text-2xl text-slate-600 dark:text-gray-300 mb-8 max-w-3xl mx-auto leading-relaxed">
                {move || translate(language.get(), key::HOME_SUBTITLE)}
            </p>
            <button
                class="btn-primary px-8 py-4 text-lg"
                on:click=move |_| screen.set(Screen::Diagnosis)
            >
                {move || translate(language.get(), key::HOME_CTA)}
                " \u{2192}"
            </button>
        </section>

        <section class="grid md:grid-cols-3 gap-8">
            {features.into_iter().map(|(title_key, desc_key, icon_class)| {
                view! {
                    <div class="card text-center hover:shadow-xl transition-all duration-300">
                        <div class=format!("inline-flex p-4 rounded-full mb-6 {icon_class}")>
                            <span class="text-2xl">"\u{2726}"</span>
                        </div>
                        <h3 class="text-xl font-semibold text-slate-900 dark:text-white mb-3">
                            {move || translate(language.get(), title_key)}
                        </h3>
                        <p class="text-slate-600 dark:text-gray-300 leading-relaxed">
                            {move || translate(language.get(), desc_key)}
                        </p>
                    </div>
                }
            }).collect::<Vec<_>>()}
        </section>

        <section class="grid md:grid-cols-3 gap-8 py-8">
            {STATS.iter().map(|&(value, label)| {
                view! {
                    <div class="text-center">
                        <div class="text-3xl font-bold text-slate-900 dark:text-white mb-2">{value}</div>
                        <div class="text-slate-600 dark:text-gray-400">{label}</div>
                    </div>
                }
            }).collect::<Vec<_>>()}
        </section>

        <section class="medical-gradient rounded-2xl py-16 px-8 text-center text-white">
            <h2 class="text-3xl md:text-4xl font-bold mb-6">"Ready to Get Started?"</h2>
            <p class="text-xl mb-8 opacity-90">
                "Experience the future of medical assistance with our AI-powered platform"
            </p>
            <div class="flex flex-col sm:flex-row gap-4 justify-center">
                <button
                    class="px-8 py-4 text-lg font-semibold rounded-xl bg-white text-blue-700 hover:shadow-lg transition-all duration-300"
                    on:click=move |_| screen.set(Screen::Diagnosis)
                >
                    {move || translate(language.get(), key::HOME_CTA)}
                </button>
                <button
                    class="px-8 py-4 text-lg font-semibold rounded-xl bg-white/10 border border-white/20 hover:bg-white/20 transition-all duration-300"
                    on:click=move |_| screen.set(Screen::FirstAid)
                >
                    {move || translate(language.get(), key::NAV_FIRST_AID)}
                </button>
            </div>
        </section>
    }
}
