use leptos::prelude::*;

use crate::content::Section;
use crate::motion::Motion;

use super::motion::Animated;

/// The contact form renders its fields but is deliberately inert: there is
/// no submission endpoint, so submit is swallowed and nothing else happens.
#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id=Section::Contact.id() class="py-20 px-6">
            <div class="container mx-auto">
                <Animated motion=Motion::drop(50.0).tween(600).on_view()>
                    <h2 class="text-4xl font-bold text-center mb-16">
                        "Contact " <span class="text-cyan-400">"Me"</span>
                    </h2>
                </Animated>
                <Animated motion=Motion::rise(40.0).tween(600).delay(200).on_view()>
                    <form
                        class="max-w-2xl mx-auto space-y-6"
                        on:submit=|ev| ev.prevent_default()
                    >
                        <div class="grid md:grid-cols-2 gap-6">
                            <ContactField input_type="text" placeholder="Full Name" />
                            <ContactField input_type="email" placeholder="Email Address" />
                        </div>
                        <div class="grid md:grid-cols-2 gap-6">
                            <ContactField input_type="tel" placeholder="Mobile Number" />
                            <ContactField input_type="text" placeholder="Email Subject" />
                        </div>
                        <textarea
                            placeholder="Your Message"
                            rows="5"
                            class="w-full p-4 bg-transparent border-2 border-cyan-400 rounded-lg focus:outline-none focus:border-cyan-300"
                        ></textarea>
                        <button
                            type="submit"
                            class="w-full md:w-auto px-8 py-4 bg-cyan-400 text-black rounded-full hover:bg-cyan-300 transition-colors"
                        >
                            "Send Message"
                        </button>
                    </form>
                </Animated>
            </div>
        </section>
    }
}

#[component]
fn ContactField(input_type: &'static str, placeholder: &'static str) -> impl IntoView {
    view! {
        <input
            type=input_type
            placeholder=placeholder
            class="w-full p-4 bg-transparent border-2 border-cyan-400 rounded-lg focus:outline-none focus:border-cyan-300"
        />
    }
}
