//! # Conventional event names and their argument schemas.
//!
//! The bus is pure routing: it guarantees delivery, not validity. Producers
//! and consumers agree on a schema per event name; this module documents the
//! convention used by the application's external collaborators (input
//! capture, on-screen UI, world state) and exports the names as constants so
//! call sites don't scatter string literals.
//!
//! ## Schema table
//!
//! | Event | Producer | Arguments |
//! |-------|----------|-----------|
//! | [`POINTER_MOVED`] | input capture | `Xabs`, `Yabs`, `Zabs` (wheel), `Xrel`, `Yrel`, `Zrel` — int |
//! | [`POINTER_PRESSED`] | input capture | `Xabs`, `Yabs` int; `id` int (button) |
//! | [`POINTER_RELEASED`] | input capture | `Xabs`, `Yabs` int; `id` int (button) |
//! | [`KEY_PRESSED`] | input capture | `key` int (keycode); `text` int (character) |
//! | [`KEY_RELEASED`] | input capture | `key` int (keycode) |
//! | [`RESIZE_WORLD`] | UI | `X`, `Y`, `Z` — int |
//! | [`PAINT_VOXEL`] | UI | `matter` str; `x`, `y`, `z`, `radius` — int |
//! | [`LOAD_WORLD`] | UI / driving loop | `data` str (map path) |
//! | [`SAVE_WORLD`] | UI | `data` str (map path) |
//! | [`WORLD_CREATED`] | world state | *(empty)* |
//! | [`WORLD_RESIZED`] | world state | *(empty)* |
//! | [`VOXEL_CHANGED`] | world state | `matter` str; `x`, `y`, `z` — int |
//! | [`MARKER_RADIUS_CHANGED`] | UI | `radius` int |
//! | [`QUIT`] | UI / input capture | *(empty)* |

/// Pointer motion, absolute and relative coordinates plus wheel.
pub const POINTER_MOVED: &str = "pointerMoved";
/// Pointer button press at an absolute position.
pub const POINTER_PRESSED: &str = "pointerPressed";
/// Pointer button release at an absolute position.
pub const POINTER_RELEASED: &str = "pointerReleased";
/// Keyboard key press (keycode + typed character).
pub const KEY_PRESSED: &str = "keyPressed";
/// Keyboard key release.
pub const KEY_RELEASED: &str = "keyReleased";
/// Request to resize the world grid.
pub const RESIZE_WORLD: &str = "resizeWorld";
/// Request to paint a sphere of matter into the world.
pub const PAINT_VOXEL: &str = "paintVoxel";
/// Request to load a world from storage.
pub const LOAD_WORLD: &str = "loadWorld";
/// Request to save the world to storage.
pub const SAVE_WORLD: &str = "saveWorld";
/// Notification: a fresh world finished building.
pub const WORLD_CREATED: &str = "worldCreated";
/// Notification: the world grid was resized.
pub const WORLD_RESIZED: &str = "worldResized";
/// Notification: one voxel changed matter.
pub const VOXEL_CHANGED: &str = "voxelChanged";
/// Notification: the paint-marker radius changed.
pub const MARKER_RADIUS_CHANGED: &str = "markerRadiusChanged";
/// Request to leave the driving loop.
pub const QUIT: &str = "quit";
