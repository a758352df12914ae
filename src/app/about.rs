use leptos::prelude::*;

use crate::content::{ABOUT_COPY, PROFILE_IMG, Section, TAGLINE};
use crate::motion::Motion;

use super::motion::Animated;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id=Section::About.id() class="bg-slate-800 py-20 px-6 overflow-hidden">
            <div class="container mx-auto">
                <Animated motion=Motion::drop(50.0).tween(600).on_view()>
                    <h2 class="text-4xl font-bold text-center mb-16">
                        "About " <span class="text-cyan-400">"Me"</span>
                    </h2>
                </Animated>
                <div class="flex flex-col md:flex-row items-center gap-12">
                    <Animated
                        motion=Motion::from_left(100.0).tween(600).delay(200).on_view()
                        class="flex-1 max-w-md"
                    >
                        <img
                            src=PROFILE_IMG
                            alt="About"
                            class="rounded-full w-96 h-96 object-cover shadow-lg shadow-cyan-400/20 hover:scale-105 transition-transform duration-300"
                        />
                    </Animated>
                    <Animated
                        motion=Motion::from_right(100.0).tween(600).delay(400).on_view()
                        class="flex-1"
                    >
                        <h3 class="text-2xl font-bold mb-6 animate-pulse">{TAGLINE}</h3>
                        <p class="text-gray-300 mb-8">{ABOUT_COPY}</p>
                        <button class="px-6 py-3 bg-cyan-400 text-black rounded-full hover:bg-cyan-300 transition-colors">
                            "Read More"
                        </button>
                    </Animated>
                </div>
            </div>
        </section>
    }
}
