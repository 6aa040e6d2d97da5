use std::time::{Duration, Instant};

use crate::config::{ConfigError, MarqueeConfig};
use crate::engine::Pacer;
use crate::machine::Reducer;
use crate::scroll::{Follower, ProgressSpan, SceneSet};
use crate::stagger::StaggerSchedule;
use crate::typing::{
    CursorBlink, RotationMachine, TypingEvent, TypingMachine, TypingReducer,
};
use crate::viewport::{intersection_ratio, GateChange, VisibilityGate};

/// Rows each panel occupies in the virtual document.
pub const PANEL_ROWS: u16 = 7;

/// What a panel reveals once its gate opens.
pub(crate) enum PanelContent {
    /// Typed character by character.
    Typewriter,
    /// Staggered word reveal.
    Stagger(StaggerSchedule),
}

/// One gated panel of the story.
pub(crate) struct PanelView {
    pub(crate) title: String,
    pub(crate) content: PanelContent,
    pub(crate) gate: VisibilityGate,
    pub(crate) revealed_at: Option<Instant>,
}

/// Showcase state: machines, gates, scroll, and the live preference.
pub struct App {
    should_quit: bool,
    reduced_motion: bool,
    /// Forced by CLI or config; live signal updates are ignored when set.
    motion_forced: bool,
    scroll: u16,
    view_rows: u16,
    last_tick: Instant,
    started: Instant,
    typing: Pacer<TypingMachine>,
    rotation: Pacer<RotationMachine>,
    cursor: Pacer<CursorBlink>,
    headline: StaggerSchedule,
    panels: Vec<PanelView>,
    scenes: SceneSet,
    follower: Follower,
    fire_once: bool,
}

impl App {
    pub fn new(
        config: MarqueeConfig,
        force_reduce: bool,
        now: Instant,
    ) -> Result<Self, ConfigError> {
        let typing = Pacer::new(TypingMachine::new(config.typing.options())?, now);
        let rotation = Pacer::new(RotationMachine::new(config.rotation.options())?, now);
        let cursor = Pacer::new(CursorBlink::default(), now);
        let headline = config.stagger.headline_schedule();
        let gate_options = config.scenes.gate_options();

        let mut panels = Vec::with_capacity(config.scenes.panels.len());
        for (i, panel) in config.scenes.panels.iter().enumerate() {
            let content = if i == 0 {
                PanelContent::Typewriter
            } else {
                PanelContent::Stagger(config.stagger.body_schedule(&panel.body))
            };
            panels.push(PanelView {
                title: panel.title.clone(),
                content,
                gate: VisibilityGate::new(gate_options)?,
                revealed_at: None,
            });
        }

        let scenes = config.scenes.scene_set()?;
        let follower = config.scenes.follower();
        let reduced_motion = force_reduce || config.motion.reduce.unwrap_or(false);
        let motion_forced = force_reduce || config.motion.reduce.is_some();

        Ok(Self {
            should_quit: false,
            reduced_motion,
            motion_forced,
            scroll: 0,
            view_rows: 1,
            last_tick: now,
            started: now,
            typing,
            rotation,
            cursor,
            headline,
            panels,
            scenes,
            follower,
            fire_once: config.scenes.fire_once,
        })
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    /// Live update from the preference watcher. Forced preferences win.
    pub fn set_reduced_motion(&mut self, reduced: bool) {
        if self.motion_forced || self.reduced_motion == reduced {
            return;
        }
        self.reduced_motion = reduced;
        tracing::info!(reduced, "motion preference updated");
    }

    pub fn on_resize(&mut self, body_rows: u16) {
        self.view_rows = body_rows.max(1);
        self.scroll = self.scroll.min(self.max_scroll());
        self.observe_gates(self.last_tick);
    }

    pub fn view_rows(&self) -> u16 {
        self.view_rows
    }

    /// Height of the virtual document in rows.
    pub fn doc_rows(&self) -> u16 {
        self.panels.len() as u16 * PANEL_ROWS
    }

    pub fn max_scroll(&self) -> u16 {
        self.doc_rows().saturating_sub(self.view_rows)
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn scroll_by(&mut self, delta: i32) {
        let target = (self.scroll as i32 + delta).clamp(0, self.max_scroll() as i32) as u16;
        self.scroll_to(target);
    }

    pub fn scroll_to(&mut self, row: u16) {
        let row = row.min(self.max_scroll());
        if row != self.scroll {
            self.scroll = row;
            self.observe_gates(self.last_tick);
        }
    }

    /// Exact scroll-linked progress, clamped to `0.0..=1.0`.
    pub fn raw_progress(&self) -> f32 {
        let max = self.max_scroll();
        if max == 0 {
            // No scrollable distance: treat the source as absent.
            return 0.0;
        }
        match ProgressSpan::new(0.0, max as f32) {
            Ok(span) => span.progress(self.scroll as f32),
            Err(_) => 0.0,
        }
    }

    pub fn smoothed_progress(&self) -> f32 {
        self.follower.value()
    }

    pub fn scene_count(&self) -> usize {
        self.scenes.len()
    }

    /// Scene owning the current raw progress.
    pub fn active_scene(&self) -> usize {
        self.scenes.active(self.raw_progress())
    }

    pub fn active_panel_title(&self) -> &str {
        &self.panels[self.active_scene()].title
    }

    pub fn typing_machine(&self) -> &TypingMachine {
        self.typing.machine()
    }

    pub fn rotation_machine(&self) -> &RotationMachine {
        self.rotation.machine()
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor.machine().visible()
    }

    pub fn headline(&self) -> &StaggerSchedule {
        &self.headline
    }

    /// Time since the showcase started, for the headline reveal.
    pub fn headline_elapsed(&self) -> Duration {
        self.last_tick.saturating_duration_since(self.started)
    }

    pub(crate) fn panels(&self) -> &[PanelView] {
        &self.panels
    }

    pub fn panel_count(&self) -> usize {
        self.panels.len()
    }

    /// Whether a panel's gate has ever opened.
    pub fn panel_triggered(&self, index: usize) -> bool {
        self.panels[index].gate.has_triggered()
    }

    /// Whether a panel's content is currently shown under its gate mode.
    pub fn panel_active(&self, index: usize) -> bool {
        self.panels[index].gate.is_active()
    }

    /// Time since `panel` revealed, zero if it has not.
    pub(crate) fn panel_elapsed(&self, panel: &PanelView) -> Duration {
        panel
            .revealed_at
            .map(|at| self.last_tick.saturating_duration_since(at))
            .unwrap_or(Duration::ZERO)
    }

    /// Advance every machine and follower to `now`.
    pub fn on_tick(&mut self, now: Instant) {
        let dt = now.saturating_duration_since(self.last_tick);
        self.last_tick = now;

        self.typing.poll(now);
        self.rotation.poll(now);
        self.cursor.poll(now);

        let raw = self.raw_progress();
        if self.reduced_motion {
            self.follower.snap(raw);
        } else {
            self.follower.advance(raw, dt);
        }

        self.observe_gates(now);
    }

    fn observe_gates(&mut self, now: Instant) {
        let window = self.scroll as i64..self.scroll as i64 + self.view_rows as i64;
        let replay = !self.fire_once;
        for (i, panel) in self.panels.iter_mut().enumerate() {
            let start = i as i64 * PANEL_ROWS as i64;
            let ratio = intersection_ratio(start..start + PANEL_ROWS as i64, window.clone());
            if panel.gate.observe(ratio) == GateChange::Entered {
                let first = panel.revealed_at.is_none();
                if first || replay {
                    panel.revealed_at = Some(now);
                    if matches!(panel.content, PanelContent::Typewriter) {
                        // Typing starts (or replays) when the panel
                        // actually reveals, not when the app boots.
                        self.typing
                            .apply(now, |m| TypingReducer::reduce(m, TypingEvent::Restart));
                    }
                    tracing::debug!(panel = i, "panel revealed");
                }
            }
        }
    }
}
