use leptos::prelude::*;

use crate::content::{
    CALLS_TO_ACTION, HERO_COPY, NAME, PROFILE_IMG, SOCIAL_LINKS, Section, TAGLINE,
};
use crate::motion::Motion;

use super::motion::Animated;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id=Section::Home.id() class="relative pt-32 pb-20 px-6 z-10">
            <div class="container mx-auto">
                <div class="flex flex-col md:flex-row items-center justify-between gap-12">
                    <Animated motion=Motion::rise(20.0).spring(500).stagger(0) class="flex-1">
                        <Animated motion=Motion::from_left(50.0).tween(500)>
                            <h1 class="text-5xl md:text-7xl font-bold mb-4">
                                "Hi, It's " <span class="text-cyan-400">{NAME}</span>
                            </h1>
                        </Animated>
                        <Animated motion=Motion::from_left(50.0).tween(600)>
                            <h2 class="text-2xl md:text-3xl mb-6">{TAGLINE}</h2>
                        </Animated>
                        <Animated motion=Motion::from_left(50.0).tween(700)>
                            <p class="text-gray-300 mb-8 max-w-2xl">{HERO_COPY}</p>
                        </Animated>
                        <Animated motion=Motion::rise(50.0).tween(800) class="flex gap-4">
                            {CALLS_TO_ACTION
                                .iter()
                                .map(|cta| {
                                    let accent = if cta.filled {
                                        "bg-cyan-400 text-black hover:bg-cyan-300"
                                    } else {
                                        "border-2 border-cyan-400 hover:bg-cyan-400 hover:text-black"
                                    };
                                    view! {
                                        <a
                                            href=cta.href
                                            class=format!(
                                                "px-6 py-3 rounded-full transition-all duration-300 {accent}",
                                            )
                                        >
                                            {cta.label}
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </Animated>
                        <Animated motion=Motion::rise(50.0).tween(900) class="flex gap-4 mt-8">
                            {SOCIAL_LINKS
                                .iter()
                                .map(|link| {
                                    view! {
                                        <a
                                            href=link.url
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class=format!(
                                                "p-3 border-2 border-cyan-400 rounded-full transition-all duration-300 {}",
                                                link.hover_accent,
                                            )
                                        >
                                            <i class=format!("{} text-2xl", link.icon.class())></i>
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </Animated>
                    </Animated>
                    <Animated
                        motion=Motion::rise(20.0).spring(500).stagger(1)
                        class="flex-1 max-w-md group"
                    >
                        <img
                            src=PROFILE_IMG
                            alt="Profile"
                            class="rounded-full w-auto h-auto object-cover shadow-lg group-hover:shadow-cyan-400/50 transition-all duration-300"
                        />
                    </Animated>
                </div>
            </div>
        </section>
    }
}
