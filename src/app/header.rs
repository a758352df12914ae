use leptos::prelude::*;

use crate::content::{Icon, NAME, NAV_ITEMS, SURNAME};
use crate::motion::Motion;

use super::motion::Animated;

/// Visibility of the mobile navigation panel. The page's only mutable state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    /// The state after a navigation link is activated.
    pub fn closed(self) -> Self {
        MenuState::Closed
    }

    pub fn is_open(self) -> bool {
        matches!(self, MenuState::Open)
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let (menu, set_menu) = signal(MenuState::default());
    let toggle = move |_| set_menu.update(|m| *m = m.toggled());
    // Navigating away must never leave the mobile panel open
    let close = move |_| set_menu.update(|m| *m = m.closed());

    view! {
        <header class="fixed top-0 left-0 right-0 z-50 bg-slate-900/80 backdrop-blur-lg">
            <Animated motion=Motion::drop(50.0).tween(500)>
                <nav class="container mx-auto px-6 py-4">
                    <div class="flex items-center justify-between">
                        <Animated motion=Motion::from_left(50.0).tween(500)>
                            <h1 class="text-2xl font-bold">
                                {NAME} " " <span class="text-cyan-400">{SURNAME}</span>
                            </h1>
                        </Animated>

                        // Desktop navigation
                        <Animated
                            motion=Motion::from_right(50.0).tween(500)
                            class="hidden md:flex items-center space-x-8"
                        >
                            {NAV_ITEMS
                                .iter()
                                .map(|item| {
                                    view! {
                                        <a
                                            href=item.section.anchor()
                                            on:click=close
                                            class="flex items-center text-sm hover:text-cyan-400 transition-all duration-300 hover:scale-110"
                                        >
                                            <i class=format!("{} w-5 h-5 mr-2", item.icon.class())></i>
                                            {item.label}
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </Animated>

                        // Mobile menu button
                        <button
                            class="md:hidden text-white"
                            on:click=toggle
                            aria-label="Toggle navigation menu"
                            aria-expanded=move || menu.get().is_open().to_string()
                        >
                            <i class=move || {
                                if menu.get().is_open() {
                                    Icon::Close.class()
                                } else {
                                    Icon::Menu.class()
                                }
                            }></i>
                        </button>
                    </div>

                    // Mobile navigation panel, absent from the tree while closed
                    <Show when=move || menu.get().is_open()>
                        <div class="md:hidden mt-4 pb-4 space-y-4">
                            {NAV_ITEMS
                                .iter()
                                .map(|item| {
                                    view! {
                                        <Animated motion=Motion::from_left(20.0).tween(300)>
                                            <a
                                                href=item.section.anchor()
                                                on:click=close
                                                class="flex items-center py-2 hover:text-cyan-400"
                                            >
                                                <i class=format!(
                                                    "{} w-5 h-5 mr-2",
                                                    item.icon.class(),
                                                )></i>
                                                {item.label}
                                            </a>
                                        </Animated>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </Show>
                </nav>
            </Animated>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_starts_closed() {
        assert_eq!(MenuState::default(), MenuState::Closed);
    }

    #[test]
    fn toggle_twice_is_identity() {
        for state in [MenuState::Closed, MenuState::Open] {
            assert_eq!(state.toggled().toggled(), state);
        }
    }

    #[test]
    fn toggle_flips_between_both_states() {
        assert_eq!(MenuState::Closed.toggled(), MenuState::Open);
        assert_eq!(MenuState::Open.toggled(), MenuState::Closed);
    }

    #[test]
    fn only_open_reports_open() {
        assert!(MenuState::Open.is_open());
        assert!(!MenuState::Closed.is_open());
    }

    #[test]
    fn close_forces_closed_from_any_state() {
        for state in [MenuState::Closed, MenuState::Open] {
            assert_eq!(state.closed(), MenuState::Closed);
            // idempotent
            assert_eq!(state.closed().closed(), MenuState::Closed);
        }
    }
}
