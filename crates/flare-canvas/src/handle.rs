use core::num::NonZeroU16;

/// Handle as seen across the module boundary.
pub type RawHandle = u32;

/// The null handle. Never produced for a live entry.
pub const NULL_HANDLE: RawHandle = 0;

/// Generational token addressing one entry of a [`HandleTable`].
///
/// Encoded as `generation << 16 | index`. Generations start at 1, so a valid
/// token never encodes to [`NULL_HANDLE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RendererHandle {
    index: u16,
    generation: NonZeroU16,
}

impl RendererHandle {
    /// Decodes a raw token. Returns `None` for the null handle and any value with a zero generation.
    pub fn from_raw(raw: RawHandle) -> Option<Self> {
        let [g_hi, g_lo, i_hi, i_lo] = raw.to_be_bytes();
        let generation = NonZeroU16::new(u16::from_be_bytes([g_hi, g_lo]))?;
        let index = u16::from_be_bytes([i_hi, i_lo]);

        Some(Self { index, generation })
    }

    pub fn into_raw(self) -> RawHandle {
        let [g_hi, g_lo] = self.generation.get().to_be_bytes();
        let [i_hi, i_lo] = self.index.to_be_bytes();

        u32::from_be_bytes([g_hi, g_lo, i_hi, i_lo])
    }

    pub fn index(self) -> u16 {
        self.index
    }
}

struct Slot<T> {
    generation: NonZeroU16,
    value: Option<T>,
}

/// Slot table handing out generational handles.
///
/// Removing an entry bumps its slot generation, so tokens held past removal
/// stop resolving instead of aliasing whatever reuses the slot. A slot whose
/// generation is exhausted is retired for good, so a token can never resolve
/// again once its entry is gone. A table whose slots are all live or retired is full.
pub struct HandleTable<T> {
    slots: Vec<Slot<T>>,
    free: Vec<u16>,
    capacity: u16,
    len: usize,
}

impl<T> HandleTable<T> {
    pub fn with_capacity(capacity: u16) -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            capacity,
            len: 0,
        }
    }

    /// Stores `value`, or hands it back when the table is full.
    pub fn insert(&mut self, value: T) -> Result<RendererHandle, T> {
        if let Some(index) = self.free.pop() {
            let Some(slot) = self.slots.get_mut(usize::from(index)) else {
                return Err(value);
            };

            slot.value = Some(value);
            self.len += 1;

            return Ok(RendererHandle {
                index,
                generation: slot.generation,
            });
        }

        if self.slots.len() >= usize::from(self.capacity) {
            return Err(value);
        }

        let Ok(index) = u16::try_from(self.slots.len()) else {
            return Err(value);
        };

        self.slots.push(Slot {
            generation: NonZeroU16::MIN,
            value: Some(value),
        });
        self.len += 1;

        Ok(RendererHandle {
            index,
            generation: NonZeroU16::MIN,
        })
    }

    pub fn get(&self, handle: RendererHandle) -> Option<&T> {
        self.slots
            .get(usize::from(handle.index))
            .filter(|slot| slot.generation == handle.generation)
            .and_then(|slot| slot.value.as_ref())
    }

    pub fn get_mut(&mut self, handle: RendererHandle) -> Option<&mut T> {
        self.slots
            .get_mut(usize::from(handle.index))
            .filter(|slot| slot.generation == handle.generation)
            .and_then(|slot| slot.value.as_mut())
    }

    pub fn remove(&mut self, handle: RendererHandle) -> Option<T> {
        let slot = self
            .slots
            .get_mut(usize::from(handle.index))
            .filter(|slot| slot.generation == handle.generation)?;

        let value = slot.value.take()?;
        self.len -= 1;

        if let Some(generation) = slot.generation.checked_add(1) {
            slot.generation = generation;
            self.free.push(handle.index);
        } else {
            debug!(index = handle.index, "Retiring handle slot with exhausted generations");
        }

        Some(value)
    }

    /// Removes every entry, invalidating all outstanding handles.
    pub fn drain(&mut self) -> Vec<T> {
        let mut values = Vec::with_capacity(self.len);

        for (index, slot) in self.slots.iter_mut().enumerate() {
            let Some(value) = slot.value.take() else {
                continue;
            };

            values.push(value);

            let Some(generation) = slot.generation.checked_add(1) else {
                continue;
            };

            slot.generation = generation;

            if let Ok(index) = u16::try_from(index) {
                self.free.push(index);
            }
        }

        self.len = 0;

        values
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> u16 {
        self.capacity
    }

    /// `true` when no slot can be handed out: every slot is either live or retired.
    pub fn is_full(&self) -> bool {
        self.free.is_empty() && self.slots.len() >= usize::from(self.capacity)
    }

    /// Number of slots retired after exhausting their generations.
    pub fn retired(&self) -> usize {
        self.slots.len() - self.len - self.free.len()
    }
}
