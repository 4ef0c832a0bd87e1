#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IntroPhase {
    #[default]
    StartScreen,
    Playing,
    FadingOut,
    Finished,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IntroFlow {
    phase: IntroPhase,
}

impl IntroFlow {
    #[cfg(test)]
    pub fn phase(&self) -> IntroPhase {
        self.phase
    }

    pub fn start_screen_visible(&self) -> bool {
        self.phase == IntroPhase::StartScreen
    }

    pub fn overlay_visible(&self) -> bool {
        matches!(self.phase, IntroPhase::Playing | IntroPhase::FadingOut)
    }

    pub fn is_fading(&self) -> bool {
        self.phase == IntroPhase::FadingOut
    }

    pub fn start(&mut self) -> bool {
        self.advance(IntroPhase::StartScreen, IntroPhase::Playing)
    }

    /// Video ended, or the platform refused to play it.
    pub fn playback_finished(&mut self) -> bool {
        self.advance(IntroPhase::Playing, IntroPhase::FadingOut)
    }

    pub fn fade_complete(&mut self) -> bool {
        self.advance(IntroPhase::FadingOut, IntroPhase::Finished)
    }

    fn advance(&mut self, from: IntroPhase, to: IntroPhase) -> bool {
        if self.phase != from {
            return false;
        }
        self.phase = to;
        true
    }
}
