use leptos::prelude::*;

use nidaan_core::analysis::{self, NextSteps};

use crate::platform::{api, capture, voice};
use crate::state::{AnalysisSession, AppState, Screen};

/// Renders one completed analysis session, or the placeholder row when the
/// screen is reached without one.
#[component]
pub fn ResultsScreen(session: Option<AnalysisSession>) -> impl IntoView {
    let state = expect_context::<AppState>();
    let language = state.language;
    let screen = state.screen;

    let reports = session
        .as_ref()
        .map(|s| analysis::condition_reports(&s.response))
        .unwrap_or_else(|| vec![analysis::fallback_report()]);
    let steps: Option<NextSteps> = session.as_ref().map(|s| analysis::next_steps(&s.response));

    // The session owns these URLs now; leaving the screen is the last chance
    // to revoke them.
    {
        let mut media_files = session
            .as_ref()
            .map(|s| s.media_files.clone())
            .unwrap_or_default();
        on_cleanup(move || capture::release_files(&mut media_files));
    }

    let summary = session.as_ref().map(|s| {
        (
            s.symptoms.len(),
            !s.transcript.trim().is_empty(),
            s.media_files.len(),
            s.response.confidence,
            s.response.severity.label(),
        )
    });
    let spoken = session
        .as_ref()
        .and_then(|s| analysis::spoken_summary(&s.response, &s.request_text));
    let request_text = session.as_ref().map(|s| s.request_text.clone());
    let symptom_names: Vec<&'static str> = session
        .as_ref()
        .map(|s| s.symptoms.iter().map(|sym| sym.name).collect())
        .unwrap_or_default();
    let transcript = session
        .as_ref()
        .map(|s| s.transcript.clone())
        .filter(|t| !t.trim().is_empty());

    view! {
        <div class="flex items-center justify-between mb-6">
            <button
                class="text-sm font-medium text-blue-600 hover:text-blue-700"
                on:click=move |_| screen.set(Screen::Diagnosis)
            >
                "\u{2190} Back to Diagnosis"
            </button>
            {spoken.map(|text| {
                let speak = move |_| voice::speak(language.get_untracked(), &text);
                view! {
                    <button class="btn-voice" title="Listen to results" on:click=speak>
                        "\u{1F50A} Listen"
                    </button>
                }
            })}
        </div>

        <div class="text-center mb-8">
            <h1 class="text-3xl md:text-4xl font-bold text-slate-900 dark:text-white mb-4">
                "Analysis Results"
            </h1>
            {summary.map(|(symptom_count, has_voice, media_count, confidence, severity)| view! {
                <p class="text-lg text-slate-600 dark:text-gray-300">
                    {format!(
                        "Based on {symptom_count} symptom(s){}{}",
                        if has_voice { " + voice input" } else { "" },
                        if media_count > 0 {
                            format!(" + {media_count} media file(s)")
                        } else {
                            String::new()
                        },
                    )}
                </p>
                <p class="text-sm text-slate-500 dark:text-gray-400 mt-1">
                    {format!(
                        "Confidence: {}% \u{00B7} Severity: {severity}",
                        (confidence * 100.0).round() as u32
                    )}
                </p>
            })}
        </div>

        {match request_text {
            Some(text) => view! {
                <div class="card bg-green-50 dark:bg-green-900/20 border-green-200 dark:border-green-800">
                    <p class="text-sm font-semibold text-green-800 dark:text-green-400 mb-1">
                        "Analyzed input"
                    </p>
                    <p class="text-sm text-green-700 dark:text-green-300">{text}</p>
                </div>
            }.into_any(),
            None => view! {
                <div class="card bg-amber-50 dark:bg-amber-900/20 border-amber-200 dark:border-amber-800">
                    <p class="text-sm font-semibold text-amber-800 dark:text-amber-400 mb-1">
                        "API Service Unavailable"
                    </p>
                    <p class="text-sm text-amber-700 dark:text-amber-300">
                        {format!(
                            "No analysis session was found. Run a diagnosis first, and make sure the analysis service at {} is reachable.",
                            api::API_BASE_URL
                        )}
                    </p>
                </div>
            }.into_any(),
        }}

        <div class="card bg-blue-50 dark:bg-blue-900/20 border-blue-200 dark:border-blue-800">
            <p class="text-sm text-blue-800 dark:text-blue-300">
                "\u{2139} This analysis is informational and is not a medical diagnosis. Always consult a qualified healthcare professional."
            </p>
        </div>

        <div class="card space-y-6">
            <h2 class="text-xl font-semibold">"Possible Conditions"</h2>
            {reports.into_iter().map(|report| view! {
                <div class="border border-slate-200 dark:border-gray-700 rounded-lg p-4 space-y-3">
                    <div class="flex items-start justify-between gap-3">
                        <h3 class="font-semibold text-slate-900 dark:text-white">
                            {report.condition}
                        </h3>
                        <div class="flex gap-2 shrink-0">
                            <span class=report.severity.badge_class()>
                                {report.severity.label()}
                            </span>
                            <span class=report.urgency.badge_class()>
                                {report.urgency.label()}
                            </span>
                        </div>
                    </div>
                    <div>
                        <div class="flex justify-between text-sm text-slate-600 dark:text-gray-300 mb-1">
                            <span>"Probability"</span>
                            <span>{format!("{}%", report.probability)}</span>
                        </div>
                        <div class="h-2 bg-slate-100 dark:bg-gray-800 rounded-full overflow-hidden">
                            <div
                                class="h-full bg-blue-600 rounded-full"
                                style=format!("width: {}%;", report.probability)
                            ></div>
                        </div>
                    </div>
                    <p class="text-sm text-slate-600 dark:text-gray-300">{report.description}</p>
                    <ul class="text-sm text-slate-600 dark:text-gray-300 list-disc list-inside space-y-1">
                        {report.recommendations.iter().map(|r| view! { <li>{*r}</li> }).collect::<Vec<_>>()}
                    </ul>
                </div>
            }).collect::<Vec<_>>()}
        </div>

        {(!symptom_names.is_empty() || transcript.is_some()).then(|| view! {
            <div class="card space-y-3">
                <h2 class="text-xl font-semibold">"Your Input"</h2>
                {(!symptom_names.is_empty()).then(|| view! {
                    <div class="flex flex-wrap gap-2">
                        {symptom_names.iter().map(|name| view! {
                            <span class="badge bg-blue-100 text-blue-800">{*name}</span>
                        }).collect::<Vec<_>>()}
                    </div>
                })}
                {transcript.map(|text| view! {
                    <div class="p-3 bg-slate-50 dark:bg-gray-800 rounded-lg text-sm text-slate-600 dark:text-gray-300">
                        <span class="font-medium">"Voice input: "</span>
                        {text}
                    </div>
                })}
            </div>
        })}

        {steps.map(|steps| view! {
            <div class="card space-y-4">
                <h2 class="text-xl font-semibold">"Next Steps"</h2>
                <div class="grid md:grid-cols-3 gap-4">
                    <div>
                        <h3 class="font-medium text-slate-900 dark:text-white mb-2">"Immediate"</h3>
                        <ul class="text-sm text-slate-600 dark:text-gray-300 list-disc list-inside space-y-1">
                            {steps.immediate.iter().map(|s| view! { <li>{*s}</li> }).collect::<Vec<_>>()}
                        </ul>
                    </div>
                    <div>
                        <h3 class="font-medium text-slate-900 dark:text-white mb-2">"Short Term"</h3>
                        <ul class="text-sm text-slate-600 dark:text-gray-300 list-disc list-inside space-y-1">
                            {steps.short_term.iter().map(|s| view! { <li>{*s}</li> }).collect::<Vec<_>>()}
                        </ul>
                    </div>
                    <div>
                        <h3 class="font-medium text-slate-900 dark:text-white mb-2">"Monitoring"</h3>
                        <ul class="text-sm text-slate-600 dark:text-gray-300 list-disc list-inside space-y-1">
                            {steps.monitoring.iter().map(|s| view! { <li>{s.clone()}</li> }).collect::<Vec<_>>()}
                        </ul>
                    </div>
                </div>
            </div>
        })}

        <div class="card bg-red-50 dark:bg-red-900/20 border-red-200 dark:border-red-800 flex flex-col sm:flex-row items-center justify-between gap-4">
            <div>
                <h2 class="font-semibold text-red-800 dark:text-red-400">"In an emergency"</h2>
                <p class="text-sm text-red-700 dark:text-red-300">
                    "If symptoms are severe or rapidly worsening, call emergency services immediately."
                </p>
            </div>
            <button
                class="px-4 py-2 rounded-lg bg-red-600 text-white text-sm font-medium hover:bg-red-700 transition-colors shrink-0"
                on:click=move |_| screen.set(Screen::FirstAid)
            >
                "View First Aid Guides"
            </button>
        </div>
    }
}
