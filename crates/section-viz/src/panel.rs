//! Keyboard control panel for the clipping controller.

use macroquad::prelude::*;
use section_planes::{AnatomicalPlane, ClippingController, RenderClippingPort, TickSource, preset};

/// How far `[` and `]` move the selected plane.
const POSITION_STEP: f32 = 0.05;

const PRESET_KEYS: [KeyCode; 5] = [KeyCode::F1, KeyCode::F2, KeyCode::F3, KeyCode::F4, KeyCode::F5];
const PLANE_KEYS: [KeyCode; 3] = [KeyCode::Key1, KeyCode::Key2, KeyCode::Key3];

/// A user action on the clipping controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelAction {
    TogglePlane(AnatomicalPlane),
    ToggleInvert(AnatomicalPlane),
    Nudge(f32),
    SelectNext,
    ApplyPreset(usize),
    Reset,
}

/// Maps key presses onto the controller API and draws the state overlay.
pub struct ControlPanel {
    selected: AnatomicalPlane,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl ControlPanel {
    pub fn new() -> Self {
        Self {
            selected: AnatomicalPlane::Sagittal,
        }
    }

    /// The plane `[` and `]` currently move.
    pub fn selected(&self) -> AnatomicalPlane {
        self.selected
    }

    /// Reads this frame's key presses.
    pub fn poll_actions(&self) -> Vec<PanelAction> {
        let shift = is_key_down(KeyCode::LeftShift) || is_key_down(KeyCode::RightShift);
        let mut actions = Vec::new();

        for (key, plane) in PLANE_KEYS.iter().zip(AnatomicalPlane::ALL) {
            if is_key_pressed(*key) {
                actions.push(if shift {
                    PanelAction::ToggleInvert(plane)
                } else {
                    PanelAction::TogglePlane(plane)
                });
            }
        }
        if is_key_pressed(KeyCode::Tab) {
            actions.push(PanelAction::SelectNext);
        }
        if is_key_pressed(KeyCode::LeftBracket) {
            actions.push(PanelAction::Nudge(-POSITION_STEP));
        }
        if is_key_pressed(KeyCode::RightBracket) {
            actions.push(PanelAction::Nudge(POSITION_STEP));
        }
        for (i, key) in PRESET_KEYS.iter().enumerate() {
            if is_key_pressed(*key) {
                actions.push(PanelAction::ApplyPreset(i));
            }
        }
        if is_key_pressed(KeyCode::R) {
            actions.push(PanelAction::Reset);
        }

        actions
    }

    /// Applies one action to the controller.
    pub fn apply<P: RenderClippingPort, C: TickSource>(
        &mut self,
        action: PanelAction,
        viewer: &mut ClippingController<P, C>,
    ) {
        match action {
            PanelAction::TogglePlane(plane) => viewer.toggle_plane(plane),
            PanelAction::ToggleInvert(plane) => viewer.toggle_invert(plane),
            PanelAction::Nudge(delta) => {
                let position = viewer.states()[self.selected].position();
                viewer.set_position(self.selected, position + delta);
            }
            PanelAction::SelectNext => {
                let next = (self.selected.index() + 1) % AnatomicalPlane::ALL.len();
                self.selected = AnatomicalPlane::ALL[next];
            }
            PanelAction::ApplyPreset(i) => {
                if let Some(preset) = preset::ALL.get(i) {
                    viewer.apply_preset(preset);
                }
            }
            PanelAction::Reset => viewer.reset(),
        }
    }

    /// Handles keyboard input for this frame.
    pub fn update<P: RenderClippingPort, C: TickSource>(
        &mut self,
        viewer: &mut ClippingController<P, C>,
    ) {
        for action in self.poll_actions() {
            log::debug!("panel action {action:?}");
            self.apply(action, viewer);
        }
    }

    /// Draws the plane states, presets and key help.
    pub fn draw_ui<P: RenderClippingPort, C: TickSource>(
        &self,
        viewer: &ClippingController<P, C>,
        y_offset: f32,
    ) {
        let states = viewer.states();
        let mut y = y_offset;

        for (plane, state) in states.iter() {
            let config = plane.config();
            let [r, g, b] = config.color;
            let marker = if plane == self.selected { ">" } else { " " };
            draw_text(
                &format!(
                    "{marker} {} ({}): {} pos {:+.2}{}",
                    config.label,
                    config.description,
                    if state.enabled() { "on " } else { "off" },
                    state.position(),
                    if state.inverted() { " inverted" } else { "" },
                ),
                10.0,
                y,
                18.0,
                if state.enabled() {
                    Color::from_rgba(r, g, b, 255)
                } else {
                    GRAY
                },
            );
            y += 20.0;
        }

        draw_text(
            &format!(
                "Clip planes: {}{}",
                viewer.compiled().len(),
                if viewer.is_animating() { " (animating)" } else { "" }
            ),
            10.0,
            y,
            18.0,
            WHITE,
        );
        y += 20.0;

        let presets = preset::ALL
            .iter()
            .enumerate()
            .map(|(i, p)| format!("F{} {}", i + 1, p.name))
            .collect::<Vec<_>>()
            .join(" | ");
        draw_text(&presets, 10.0, y, 16.0, YELLOW);
        y += 20.0;

        draw_text(
            "[1/2/3] toggle | Shift+[1/2/3] invert | [Tab] select | [ / ] move | [R] reset",
            10.0,
            y,
            16.0,
            DARKGRAY,
        );
    }
}
