use anyhow::Result;

use super::keys::*;
use crate::color::ColorState;

/// Where the swatch is shown.
pub trait Surface {
    /// Paints the background with `state` and refreshes the status text.
    fn redraw(&mut self, state: &ColorState) -> Result<()>;

    /// Asks the host to show this surface full-screen. Best effort.
    fn request_fullscreen(&mut self);
}

/// What a single key did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dispatch {
    /// The color changed and the surface was redrawn.
    Redrawn,
    /// Full-screen was requested; nothing redrawn.
    FullScreen,
    /// Key has no mapping.
    Ignored,
}

/// Owns the session's color and routes keys to it.
#[derive(Debug, Default)]
pub struct Dispatcher {
    state: ColorState,
}

impl Dispatcher {
    pub fn new(state: ColorState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &ColorState {
        &self.state
    }

    pub fn dispatch<S: Surface + ?Sized>(&mut self, key: u32, surface: &mut S) -> Result<Dispatch> {
        match key {
            VK_0..=VK_9 => self.state.set_level((key - VK_0) as i32 * 10),
            VK_A => self.state.set_level(100),
            VK_R => self.state.toggle_red(),
            VK_G => self.state.toggle_green(),
            VK_B => self.state.toggle_blue(),
            VK_SPACE | VK_RIGHT => self.state.increment_level(),
            VK_LEFT => self.state.decrement_level(),
            VK_F => {
                surface.request_fullscreen();
                return Ok(Dispatch::FullScreen);
            }
            _ => return Ok(Dispatch::Ignored),
        }

        surface.redraw(&self.state)?;
        Ok(Dispatch::Redrawn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingSurface {
        painted: Vec<String>,
        fullscreen_requests: usize,
    }

    impl Surface for RecordingSurface {
        fn redraw(&mut self, state: &ColorState) -> Result<()> {
            self.painted.push(state.render_color());
            Ok(())
        }

        fn request_fullscreen(&mut self) {
            self.fullscreen_requests += 1;
        }
    }

    #[test]
    fn test_unmapped_key_is_ignored() {
        let mut dispatcher = Dispatcher::default();
        let mut surface = RecordingSurface::default();

        for key in [81, 13, 38, 122, 999] {
            assert_eq!(dispatcher.dispatch(key, &mut surface).unwrap(), Dispatch::Ignored);
        }
        assert_eq!(dispatcher.state(), &ColorState::new());
        assert!(surface.painted.is_empty());
        assert_eq!(surface.fullscreen_requests, 0);
    }

    #[test]
    fn test_digit_sets_level() {
        let mut dispatcher = Dispatcher::default();
        let mut surface = RecordingSurface::default();

        assert_eq!(dispatcher.dispatch(53, &mut surface).unwrap(), Dispatch::Redrawn);
        assert_eq!(dispatcher.state().level(), 50);
        dispatcher.dispatch(VK_0, &mut surface).unwrap();
        assert_eq!(dispatcher.state().level(), 0);
        dispatcher.dispatch(VK_9, &mut surface).unwrap();
        assert_eq!(dispatcher.state().level(), 90);
        assert_eq!(surface.painted.len(), 3);
    }

    #[test]
    fn test_a_sets_full_level_on_lit_channels_only() {
        let mut dispatcher = Dispatcher::default();
        let mut surface = RecordingSurface::default();

        dispatcher.dispatch(VK_B, &mut surface).unwrap();
        dispatcher.dispatch(49, &mut surface).unwrap();
        dispatcher.dispatch(VK_A, &mut surface).unwrap();
        assert_eq!(surface.painted.last().unwrap(), "rgb(100%, 100%, 0%)");
    }

    #[test]
    fn test_channel_toggles_redraw() {
        let mut dispatcher = Dispatcher::default();
        let mut surface = RecordingSurface::default();

        dispatcher.dispatch(VK_R, &mut surface).unwrap();
        dispatcher.dispatch(VK_G, &mut surface).unwrap();
        assert_eq!(surface.painted, vec!["rgb(0%, 100%, 100%)", "rgb(0%, 0%, 100%)"]);
    }

    #[test]
    fn test_arrows_and_space_step_level() {
        let mut dispatcher = Dispatcher::default();
        let mut surface = RecordingSurface::default();

        dispatcher.dispatch(VK_SPACE, &mut surface).unwrap();
        assert_eq!(dispatcher.state().level(), 0);
        dispatcher.dispatch(VK_RIGHT, &mut surface).unwrap();
        assert_eq!(dispatcher.state().level(), 10);
        dispatcher.dispatch(VK_LEFT, &mut surface).unwrap();
        dispatcher.dispatch(VK_LEFT, &mut surface).unwrap();
        assert_eq!(dispatcher.state().level(), 100);
    }

    #[test]
    fn test_f_requests_fullscreen_without_redraw() {
        let mut dispatcher = Dispatcher::default();
        let mut surface = RecordingSurface::default();

        assert_eq!(dispatcher.dispatch(VK_F, &mut surface).unwrap(), Dispatch::FullScreen);
        assert_eq!(surface.fullscreen_requests, 1);
        assert!(surface.painted.is_empty());
        assert_eq!(dispatcher.state(), &ColorState::new());
    }
}
