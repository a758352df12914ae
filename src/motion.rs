//! Declarative animation descriptors.
//!
//! Each animated element supplies an initial frame, a target frame, a
//! trigger, and timing. The descriptors render to inline CSS; the browser's
//! transition engine does all interpolation. Nothing here ever computes an
//! intermediate frame.

/// Delay before the first staggered child starts, in milliseconds.
pub const CHILD_DELAY_MS: u32 = 300;
/// Additional delay per staggered child.
pub const STAGGER_MS: u32 = 200;

const DEFAULT_DURATION_MS: u32 = 500;

/// A visual state: opacity plus a translation offset in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
}

impl Frame {
    /// Fully visible, in natural position.
    pub const IDENTITY: Frame = Frame {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
    };

    /// Invisible, offset from natural position.
    pub const fn hidden(x: f64, y: f64) -> Frame {
        Frame { opacity: 0.0, x, y }
    }

    fn style(&self) -> String {
        format!(
            "opacity:{};transform:translate({}px,{}px)",
            self.opacity, self.x, self.y
        )
    }
}

/// When an animation fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// As soon as the element mounts on the client.
    Mount,
    /// The first time the element scrolls into the viewport. Latches after
    /// firing; it never replays.
    EnterViewport,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    EaseOut,
    /// Pulls back slightly before accelerating toward the target.
    Anticipate,
    /// Overshoots the target and settles.
    Spring,
}

impl Easing {
    pub const fn css(self) -> &'static str {
        match self {
            Easing::EaseOut => "ease-out",
            Easing::Anticipate => "cubic-bezier(0.7,-0.4,0.4,1.4)",
            Easing::Spring => "cubic-bezier(0.34,1.56,0.64,1)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timing {
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub easing: Easing,
}

impl Timing {
    fn transition(&self) -> String {
        let Timing {
            duration_ms,
            delay_ms,
            easing,
        } = self;
        let easing = easing.css();
        format!(
            "transition:opacity {duration_ms}ms {easing} {delay_ms}ms,transform {duration_ms}ms {easing} {delay_ms}ms"
        )
    }
}

/// The full descriptor for one animated element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub initial: Frame,
    pub target: Frame,
    pub trigger: Trigger,
    pub timing: Timing,
}

impl Motion {
    const fn new(initial: Frame) -> Self {
        Motion {
            initial,
            target: Frame::IDENTITY,
            trigger: Trigger::Mount,
            timing: Timing {
                duration_ms: DEFAULT_DURATION_MS,
                delay_ms: 0,
                easing: Easing::EaseOut,
            },
        }
    }

    /// Fade in with no movement.
    pub const fn fade() -> Self {
        Self::new(Frame::hidden(0.0, 0.0))
    }

    /// Fade in while rising `px` pixels.
    pub const fn rise(px: f64) -> Self {
        Self::new(Frame::hidden(0.0, px))
    }

    /// Fade in while dropping down `px` pixels.
    pub const fn drop(px: f64) -> Self {
        Self::new(Frame::hidden(0.0, -px))
    }

    /// Fade in while sliding in from `px` pixels to the left.
    pub const fn from_left(px: f64) -> Self {
        Self::new(Frame::hidden(-px, 0.0))
    }

    /// Fade in while sliding in from `px` pixels to the right.
    pub const fn from_right(px: f64) -> Self {
        Self::new(Frame::hidden(px, 0.0))
    }

    pub const fn tween(mut self, duration_ms: u32) -> Self {
        self.timing.duration_ms = duration_ms;
        self.timing.easing = Easing::EaseOut;
        self
    }

    pub const fn anticipate(mut self, duration_ms: u32) -> Self {
        self.timing.duration_ms = duration_ms;
        self.timing.easing = Easing::Anticipate;
        self
    }

    pub const fn spring(mut self, duration_ms: u32) -> Self {
        self.timing.duration_ms = duration_ms;
        self.timing.easing = Easing::Spring;
        self
    }

    pub const fn delay(mut self, delay_ms: u32) -> Self {
        self.timing.delay_ms = delay_ms;
        self
    }

    /// Delay for the `index`-th child of an animated list.
    pub const fn stagger(self, index: usize) -> Self {
        self.delay(CHILD_DELAY_MS + STAGGER_MS * index as u32)
    }

    /// Fire on first viewport intersection instead of on mount.
    pub const fn on_view(mut self) -> Self {
        self.trigger = Trigger::EnterViewport;
        self
    }

    /// Inline style for the element. Before the trigger fires the initial
    /// frame is shown; afterwards the target frame, with the transition
    /// carrying the element between the two.
    pub fn style(&self, fired: bool) -> String {
        let frame = if fired { &self.target } else { &self.initial };
        format!("{};{}", frame.style(), self.timing.transition())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_frame_shown_until_trigger_fires() {
        let motion = Motion::rise(20.0).tween(500);
        let style = motion.style(false);
        assert!(style.contains("opacity:0"));
        assert!(style.contains("translate(0px,20px)"));
    }

    #[test]
    fn target_frame_shown_after_trigger_fires() {
        let motion = Motion::rise(20.0).tween(500);
        let style = motion.style(true);
        assert!(style.contains("opacity:1"));
        assert!(style.contains("translate(0px,0px)"));
    }

    #[test]
    fn transition_carries_duration_delay_and_easing() {
        let style = Motion::fade().spring(600).delay(150).style(true);
        assert!(style.contains("transition:opacity 600ms cubic-bezier(0.34,1.56,0.64,1) 150ms"));
        assert!(style.contains("transform 600ms cubic-bezier(0.34,1.56,0.64,1) 150ms"));
    }

    #[test]
    fn style_is_pure_in_the_fired_flag() {
        let motion = Motion::from_left(100.0).tween(600).on_view();
        assert_eq!(motion.style(false), motion.style(false));
        assert_eq!(motion.style(true), motion.style(true));
        assert_ne!(motion.style(false), motion.style(true));
    }

    #[test]
    fn stagger_delay_grows_linearly() {
        assert_eq!(Motion::fade().stagger(0).timing.delay_ms, CHILD_DELAY_MS);
        assert_eq!(
            Motion::fade().stagger(3).timing.delay_ms,
            CHILD_DELAY_MS + 3 * STAGGER_MS
        );
    }

    #[test]
    fn directional_constructors_offset_the_right_axis() {
        assert_eq!(Motion::from_left(50.0).initial.x, -50.0);
        assert_eq!(Motion::from_right(50.0).initial.x, 50.0);
        assert_eq!(Motion::rise(20.0).initial.y, 20.0);
        assert_eq!(Motion::drop(50.0).initial.y, -50.0);
    }

    #[test]
    fn trigger_defaults_to_mount() {
        assert_eq!(Motion::fade().trigger, Trigger::Mount);
        assert_eq!(Motion::fade().on_view().trigger, Trigger::EnterViewport);
    }
}
