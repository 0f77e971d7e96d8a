use crate::error::GestureError;
use crate::gesture::GestureClass;
use crate::traits::Controller;
use crate::types::ConfirmedGesture;
use std::fmt;

/// Everything a controller back-end can be asked to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    VolumeUp,
    VolumeDown,
    PlayPause,
    Mute,
    NextTrack,
    PreviousTrack,
    MoveCursor,
    PressButton,
    ReleaseButton,
    DoubleClick,
    BrightnessUp,
    BrightnessDown,
    LockScreen,
    Screenshot,
}

impl Action {
    /// Human-readable description, used for on-screen feedback and logs.
    pub fn description(self) -> &'static str {
        match self {
            Action::VolumeUp => "Volume Up",
            Action::VolumeDown => "Volume Down",
            Action::PlayPause => "Play/Pause",
            Action::Mute => "Mute",
            Action::NextTrack => "Next Track",
            Action::PreviousTrack => "Previous Track",
            Action::MoveCursor => "Move Cursor",
            Action::PressButton => "Press Button",
            Action::ReleaseButton => "Release Button",
            Action::DoubleClick => "Double Click",
            Action::BrightnessUp => "Brightness Up",
            Action::BrightnessDown => "Brightness Down",
            Action::LockScreen => "Lock Screen",
            Action::Screenshot => "Screenshot",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// The closed set of controller profiles.
///
/// Each profile is a fixed gesture-to-action table resolved at compile
/// time. A gesture absent from the active table is ignored on dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    Media,
    Pointer,
    System,
}

impl Profile {
    pub const ALL: [Profile; 3] = [Profile::Media, Profile::Pointer, Profile::System];

    pub fn name(self) -> &'static str {
        match self {
            Profile::Media => "media",
            Profile::Pointer => "pointer",
            Profile::System => "system",
        }
    }

    pub fn from_name(name: &str) -> Option<Profile> {
        match name {
            "media" => Some(Profile::Media),
            "pointer" => Some(Profile::Pointer),
            "system" => Some(Profile::System),
            _ => None,
        }
    }

    /// The profile's gesture table.
    pub fn action_for(self, gesture: GestureClass) -> Option<Action> {
        match self {
            Profile::Media => match gesture {
                GestureClass::ThumbsUp => Some(Action::VolumeUp),
                GestureClass::ThumbsDown => Some(Action::VolumeDown),
                GestureClass::Peace => Some(Action::NextTrack),
                GestureClass::Fist => Some(Action::Mute),
                GestureClass::OpenPalm => Some(Action::PlayPause),
                GestureClass::Pointing => Some(Action::PreviousTrack),
            },
            Profile::Pointer => match gesture {
                GestureClass::Pointing => Some(Action::MoveCursor),
                GestureClass::Fist => Some(Action::PressButton),
                GestureClass::OpenPalm => Some(Action::ReleaseButton),
                GestureClass::Peace => Some(Action::DoubleClick),
                _ => None,
            },
            Profile::System => match gesture {
                GestureClass::ThumbsUp => Some(Action::BrightnessUp),
                GestureClass::ThumbsDown => Some(Action::BrightnessDown),
                GestureClass::OpenPalm => Some(Action::LockScreen),
                GestureClass::Peace => Some(Action::Screenshot),
                _ => None,
            },
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Routes confirmed gestures to the active profile's actions.
#[derive(Debug)]
pub struct ActionDispatcher<C> {
    profile: Profile,
    controller: C,
}

impl<C: Controller> ActionDispatcher<C> {
    pub fn new(profile: Profile, controller: C) -> Self {
        Self {
            profile,
            controller,
        }
    }

    pub fn active_profile(&self) -> Profile {
        self.profile
    }

    pub fn controller(&self) -> &C {
        &self.controller
    }

    /// Switch the active profile by name.
    ///
    /// An unknown name is reported as an error and leaves the active
    /// profile unchanged.
    pub fn switch_profile(&mut self, name: &str) -> Result<(), GestureError> {
        match Profile::from_name(name) {
            Some(profile) => {
                if profile != self.profile {
                    log::info!("switching profile: {} -> {}", self.profile, profile);
                }
                self.profile = profile;
                Ok(())
            }
            None => Err(GestureError::UnknownProfile(name.to_string())),
        }
    }

    /// Look up the event's gesture in the active profile and execute it.
    ///
    /// A gesture without an entry in the active table is a no-op, not an
    /// error.
    pub fn dispatch(&mut self, event: &ConfirmedGesture) {
        if let Some(action) = self.profile.action_for(event.label) {
            log::debug!("{} -> {}", event.label, action);
            self.controller.execute(action);
        }
    }
}
