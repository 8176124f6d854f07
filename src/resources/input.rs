//! Per-frame input resource.
//!
//! Captures the keys and pointer state the game reacts to. Letters typed
//! this frame are collected from raylib's character queue so that fast
//! typing is never dropped between frames.
use arrayvec::ArrayVec;
use bevy_ecs::prelude::*;
use raylib::prelude::*;

/// Characters buffered per frame; extra characters in the same frame are
/// discarded.
pub const TYPED_CAPACITY: usize = 16;

#[derive(Debug, Clone, Copy)]
/// Boolean key state with an associated keyboard binding.
pub struct BoolState {
    /// Whether the key is currently held.
    pub active: bool,
    /// Whether the key was pressed this frame.
    pub just_pressed: bool,
    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

impl BoolState {
    pub fn bound_to(key_binding: KeyboardKey) -> Self {
        Self {
            active: false,
            just_pressed: false,
            key_binding,
        }
    }
}

impl Default for BoolState {
    fn default() -> Self {
        Self::bound_to(KeyboardKey::KEY_NULL)
    }
}

/// Resource capturing this frame's input.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    /// Leave the game.
    pub action_back: BoolState,
    /// Start a new round once the current one is over.
    pub action_confirm: BoolState,
    /// Toggle the debug overlay.
    pub mode_debug: BoolState,
    /// Characters typed this frame, in order.
    pub typed: ArrayVec<char, TYPED_CAPACITY>,
    pub pointer: Vector2,
    /// Left mouse button went down this frame.
    pub pointer_pressed: bool,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            action_back: BoolState::bound_to(KeyboardKey::KEY_ESCAPE),
            action_confirm: BoolState::bound_to(KeyboardKey::KEY_ENTER),
            mode_debug: BoolState::bound_to(KeyboardKey::KEY_F11),
            typed: ArrayVec::new(),
            pointer: Vector2::new(0.0, 0.0),
            pointer_pressed: false,
        }
    }
}

impl InputState {
    /// Forget everything that only lasts one frame.
    pub fn clear_frame(&mut self) {
        self.action_back.just_pressed = false;
        self.action_confirm.just_pressed = false;
        self.mode_debug.just_pressed = false;
        self.typed.clear();
        self.pointer_pressed = false;
    }

    /// Buffer a typed character; ignored once the buffer is full.
    pub fn push_typed(&mut self, c: char) {
        let _ = self.typed.try_push(c);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_key_bindings() {
        let input = InputState::default();
        assert_eq!(input.action_back.key_binding, KeyboardKey::KEY_ESCAPE);
        assert_eq!(input.action_confirm.key_binding, KeyboardKey::KEY_ENTER);
        assert_eq!(input.mode_debug.key_binding, KeyboardKey::KEY_F11);
        assert!(input.typed.is_empty());
    }

    #[test]
    fn typed_buffer_is_bounded_and_cleared() {
        let mut input = InputState::default();
        for _ in 0..TYPED_CAPACITY + 4 {
            input.push_typed('a');
        }
        assert_eq!(input.typed.len(), TYPED_CAPACITY);
        input.pointer_pressed = true;
        input.clear_frame();
        assert!(input.typed.is_empty());
        assert!(!input.pointer_pressed);
    }
}
