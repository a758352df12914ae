use leptos::prelude::*;

use crate::content::{Icon, NAME, Section};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-slate-800 py-6 relative z-10">
            <div class="container mx-auto px-6">
                <div class="flex flex-col md:flex-row items-center justify-between">
                    <p class="text-sm text-gray-400">
                        {format!(
                            "Copyright © {} by {} | All Rights Reserved.",
                            env!("BUILD_YEAR"),
                            NAME,
                        )}
                    </p>
                    <a
                        href=Section::Home.anchor()
                        aria-label="Back to top"
                        class="mt-4 md:mt-0 p-2 bg-cyan-400 rounded-full hover:bg-cyan-300 transition-colors"
                    >
                        <i class=format!("{} w-5 h-5 text-black", Icon::ArrowUp.class())></i>
                    </a>
                </div>
            </div>
        </footer>
    }
}
