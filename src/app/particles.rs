use leptos::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Number of decorative background dots.
pub const PARTICLE_COUNT: u64 = 50;

/// Animation parameters for one background dot.
///
/// Parameters derive from the particle index, not an entropy source, and
/// `StdRng` produces the same stream on x86_64 and wasm32: server-rendered
/// markup and the hydrating client must agree byte-for-byte.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Particle {
    /// Start position, percent of the viewport.
    x: f64,
    y: f64,
    /// Drift to the far keyframe, in viewport units.
    drift_x: f64,
    drift_y: f64,
    scale: f64,
    duration_s: f64,
}

impl Particle {
    fn from_seed(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let x = rng.random_range(0.0..100.0);
        let y = rng.random_range(0.0..100.0);
        Particle {
            x,
            y,
            drift_x: rng.random_range(0.0..100.0) - x,
            drift_y: rng.random_range(0.0..100.0) - y,
            scale: rng.random_range(0.0..2.0),
            duration_s: rng.random_range(10.0..30.0),
        }
    }

    /// Inline style consumed by the `drift` keyframes in `input.css`.
    fn style(&self) -> String {
        format!(
            "left:{:.2}%;top:{:.2}%;--drift-x:{:.2}vw;--drift-y:{:.2}vh;--scale:{:.2};animation-duration:{:.1}s",
            self.x, self.y, self.drift_x, self.drift_y, self.scale, self.duration_s
        )
    }
}

/// Purely cosmetic layer behind all content. Never intercepts pointer
/// events, never touches application state.
#[component]
pub fn ParticleField() -> impl IntoView {
    view! {
        <div class="fixed inset-0 z-0 opacity-20 pointer-events-none" aria-hidden="true">
            {(0..PARTICLE_COUNT)
                .map(|seed| {
                    view! {
                        <div
                            class="particle absolute w-2 h-2 bg-cyan-400 rounded-full"
                            style=Particle::from_seed(seed).style()
                        ></div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_particle() {
        for seed in 0..PARTICLE_COUNT {
            assert_eq!(Particle::from_seed(seed), Particle::from_seed(seed));
        }
    }

    #[test]
    fn parameters_stay_in_declared_ranges() {
        for seed in 0..PARTICLE_COUNT {
            let p = Particle::from_seed(seed);
            assert!((0.0..100.0).contains(&p.x));
            assert!((0.0..100.0).contains(&p.y));
            assert!((-100.0..100.0).contains(&p.drift_x));
            assert!((-100.0..100.0).contains(&p.drift_y));
            assert!((0.0..2.0).contains(&p.scale));
            assert!((10.0..30.0).contains(&p.duration_s));
        }
    }

    #[test]
    fn neighboring_seeds_diverge() {
        let first = Particle::from_seed(0);
        let distinct = (1..PARTICLE_COUNT)
            .map(Particle::from_seed)
            .filter(|p| p != &first)
            .count();
        assert_eq!(distinct as u64, PARTICLE_COUNT - 1);
    }
}
