use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

use crate::motion::{Motion, Trigger};

/// Renders a motion descriptor as an animated wrapper `<div>`.
///
/// The element mounts wearing the descriptor's initial frame. When the
/// trigger fires, the style flips to the target frame and the CSS transition
/// plays. Viewport triggers latch on first intersection and never replay.
#[component]
pub fn Animated(
    motion: Motion,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let el = NodeRef::<html::Div>::new();
    let (fired, set_fired) = signal(false);

    match motion.trigger {
        Trigger::Mount => {
            // Effects only run on the client, so SSR output keeps the
            // initial frame and the entrance plays after hydration.
            Effect::new(move |_| {
                set_fired.set(true);
            });
        }
        Trigger::EnterViewport => {
            let visibility = use_element_visibility(el);
            Effect::new(move |_| {
                if visibility.get() && !fired.get_untracked() {
                    set_fired.set(true);
                }
            });
        }
    }

    view! {
        <div node_ref=el class=class style=move || motion.style(fired.get())>
            {children()}
        </div>
    }
}
