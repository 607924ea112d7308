//! Error types for room validation.

use std::error::Error;
use std::fmt;
use tesserae_core::Feature;

/// Errors from [`Room::new`](crate::Room::new).
///
/// Every variant embeds a glyph rendering of the attempted room (the
/// exact sub-rectangle spanned by the supplied features) so the
/// failing layout can be inspected without replaying the caller's
/// logic. All variants are caller-input errors; nothing is retried
/// internally.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoomError {
    /// Fewer than the minimum number of floor features were supplied.
    InsufficientFloor {
        /// How many floor features were found.
        found: usize,
        /// Rendering of the attempted room.
        rendering: String,
    },
    /// The floor features do not form one orthogonally-connected
    /// region.
    DisconnectedFloor {
        /// Rendering of the attempted room.
        rendering: String,
    },
    /// One or more doors lack an orthogonally-adjacent floor or sit
    /// away from the room's outer edge.
    IllegalDoors {
        /// Every offending door.
        doors: Vec<Feature>,
        /// Rendering of the attempted room.
        rendering: String,
    },
}

impl fmt::Display for RoomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsufficientFloor { found, rendering } => {
                write!(
                    f,
                    "a room cannot have less than 3 floor tiles, got {found}:\n{rendering}"
                )
            }
            Self::DisconnectedFloor { rendering } => {
                write!(
                    f,
                    "rooms with non-orthogonally adjacent floors are not allowed:\n{rendering}"
                )
            }
            Self::IllegalDoors { doors, rendering } => {
                write!(
                    f,
                    "doors must touch a floor orthogonally and sit on the room's outer edge; \
                     offending doors: {doors:?}. Room:\n{rendering}"
                )
            }
        }
    }
}

impl Error for RoomError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_embed_the_rendering() {
        let err = RoomError::DisconnectedFloor {
            rendering: "- --".into(),
        };
        assert!(err.to_string().contains("- --"));

        let err = RoomError::IllegalDoors {
            doors: vec![Feature::door(1, 1)],
            rendering: "---\n-D-\n---".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("---\n-D-\n---"), "{msg}");
        assert!(msg.contains("Door"), "{msg}");
    }
}
