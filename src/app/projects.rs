use leptos::prelude::*;

use crate::content::{ALL_PROJECTS_URL, PROJECTS, Project, Section};
use crate::motion::Motion;

use super::motion::Animated;

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id=Section::Projects.id() class="py-20 px-6 bg-gray-900">
            <div class="container mx-auto">
                <Animated motion=Motion::drop(50.0).tween(600).on_view()>
                    <h2 class="text-4xl font-bold text-center mb-16">
                        "My " <span class="text-cyan-400">"Projects"</span>
                    </h2>
                </Animated>
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(i, project)| {
                            // Stagger within the row, not across the whole grid
                            view! {
                                <Animated motion=Motion::rise(30.0).tween(500).stagger(i % 3).on_view()>
                                    <ProjectCard project=*project />
                                </Animated>
                            }
                        })
                        .collect_view()}
                </div>
                <Animated
                    motion=Motion::rise(30.0).tween(500).on_view()
                    class="text-center mt-12"
                >
                    <a
                        href=ALL_PROJECTS_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class="bg-cyan-400 text-gray-900 px-6 py-3 rounded-md text-lg font-semibold hover:bg-cyan-500 transition duration-300 inline-block"
                    >
                        "View All Projects"
                    </a>
                </Animated>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg overflow-hidden shadow-lg transform transition duration-300 hover:scale-105 h-full">
            <div class="relative">
                <img
                    src=project.thumbnail
                    alt=format!("{} thumbnail", project.title)
                    class="w-full h-48 object-cover"
                />
                <div class="absolute inset-0 bg-black opacity-50"></div>
            </div>
            <div class="p-6">
                <h3 class="text-xl font-bold mb-3 text-cyan-400">{project.title}</h3>
                <p class="text-gray-300 mb-4">{project.description}</p>
                <div class="flex space-x-4">
                    <a
                        href=project.primary.url
                        target="_blank"
                        rel="noopener noreferrer"
                        class="bg-cyan-400 text-gray-900 px-4 py-2 rounded-md hover:bg-cyan-500 transition duration-300"
                    >
                        {project.primary.label}
                    </a>
                    {project
                        .secondary
                        .map(|repo| {
                            view! {
                                <a
                                    href=repo.url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="border border-cyan-400 text-cyan-400 px-4 py-2 rounded-md hover:bg-cyan-400 hover:text-gray-900 transition duration-300"
                                >
                                    {repo.label}
                                </a>
                            }
                        })}
                </div>
            </div>
        </div>
    }
}
