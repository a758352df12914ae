use leptos::prelude::*;

use crate::content::{Section, TIMELINE_COLUMNS, TimelineColumn};
use crate::motion::Motion;

use super::motion::Animated;

#[component]
pub fn Education() -> impl IntoView {
    view! {
        <section id=Section::Education.id() class="py-20 px-6">
            <div class="container mx-auto">
                <Animated motion=Motion::drop(50.0).tween(600).on_view()>
                    <h2 class="text-4xl font-bold text-center mb-16">
                        "Education & " <span class="text-cyan-400">"Experience"</span>
                    </h2>
                </Animated>
                <div class="grid md:grid-cols-2 gap-12 max-w-5xl mx-auto">
                    {TIMELINE_COLUMNS
                        .iter()
                        .enumerate()
                        .map(|(i, column)| {
                            view! {
                                <Animated motion=Motion::rise(40.0).tween(600).stagger(i).on_view()>
                                    <Timeline column=*column />
                                </Animated>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn Timeline(column: TimelineColumn) -> impl IntoView {
    view! {
        <div>
            <h3 class="text-2xl font-bold mb-8 text-cyan-400 border-b-2 border-cyan-400 pb-4">
                {column.title}
            </h3>
            <div class="relative pl-8 border-l-2 border-cyan-400">
                {column
                    .entries
                    .iter()
                    .map(|entry| {
                        view! {
                            <div class="mb-12">
                                <span class="absolute -left-3 flex items-center justify-center w-6 h-6 bg-cyan-400 rounded-full">
                                    <span class="w-3 h-3 bg-white rounded-full"></span>
                                </span>
                                <h4 class="text-xl font-bold mb-2">{entry.heading}</h4>
                                <span class="text-cyan-400 text-sm">{entry.period}</span>
                                <p class="mt-4 text-gray-300">{entry.body}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
