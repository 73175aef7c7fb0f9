//! Specialized collection types

pub use slotmap::SlotMap;

slotmap::new_key_type! {
    /// Generation-checked handle to a decoration area.
    ///
    /// Handles are invalidated wholesale whenever the owning layout is rebuilt,
    /// so a handle retained across a resize resolves to nothing instead of a
    /// different area.
    pub struct AreaHandle;

    /// Handle to an image uploaded to a render backend
    pub struct TextureHandle;
}

/// Handle-based map using slot map for stable references
pub type HandleMap<K, T> = SlotMap<K, T>;
