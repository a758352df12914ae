use leptos::prelude::*;

use crate::content::{SKILL_GROUPS, Section};
use crate::motion::Motion;

use super::motion::Animated;

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id=Section::Skills.id() class="bg-slate-800 py-20 px-6">
            <div class="container mx-auto">
                <Animated motion=Motion::drop(50.0).tween(600).on_view()>
                    <h2 class="text-4xl font-bold text-center mb-16">
                        "My " <span class="text-cyan-400">"Skills"</span>
                    </h2>
                </Animated>
                <div class="grid md:grid-cols-2 gap-8 max-w-4xl mx-auto">
                    {SKILL_GROUPS
                        .iter()
                        .enumerate()
                        .map(|(i, group)| {
                            view! {
                                <Animated
                                    motion=Motion::rise(40.0).tween(500).stagger(i).on_view()
                                    class="bg-slate-900 p-8 rounded-lg"
                                >
                                    <h3 class="text-2xl font-bold mb-8 text-center">
                                        {group.name}
                                    </h3>
                                    <div class="grid grid-cols-2 gap-6">
                                        {group
                                            .skills
                                            .iter()
                                            .map(|skill| {
                                                view! {
                                                    <div class="flex items-center gap-4 p-4 bg-slate-800 rounded-lg">
                                                        <div class="w-2 h-2 bg-cyan-400 rounded-full"></div>
                                                        <span>{*skill}</span>
                                                    </div>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </Animated>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
