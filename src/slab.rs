use std::mem;
use std::ops::{Index, IndexMut};

#[cfg(test)]
use static_assertions::const_assert_eq;

/// An index into a slab, or "null"
///
/// This type is essentially `Option<usize>`. The value usize::MAX is
/// reserved to represent `None` or "null".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Ptr(usize);

// Every node stores three of these, so keep them as small as a plain index
#[cfg(test)]
const_assert_eq!(mem::size_of::<Ptr>(), mem::size_of::<usize>());
// Using `Option<usize>` directly would use more space.
#[cfg(test)]
const_assert_eq!(mem::size_of::<Option<usize>>(), 2 * mem::size_of::<usize>());

impl Default for Ptr {
    #[inline(always)]
    fn default() -> Self {
        Self::null()
    }
}

impl Ptr {
    #[inline(always)]
    pub fn null() -> Self {
        Ptr(usize::MAX)
    }

    // Methods on this type must be `#[inline]` to help the compiler see that the `Option` values
    // are only intermediate values used to make writing code easier. Instead of checking for `None`
    // and then `usize::MAX`, we want the compiler to just check the latter.
    #[inline(always)]
    pub fn into_index(self) -> Option<usize> {
        let Ptr(index) = self;
        if index == usize::MAX {
            None
        } else {
            Some(index)
        }
    }

    #[inline(always)]
    pub fn is_null(self) -> bool {
        self.0 == usize::MAX
    }
}

#[derive(Debug, Clone)]
enum Entry<T> {
    Occupied(T),
    /// An item in the free list, pointing at the next free entry (or null for the last one)
    Free { next: Ptr },
}

/// An allocation primitive similar to `Vec`, but implemented to reuse space from removed entries.
///
/// Items are kept contiguously in memory, but indexes are not shifted when an individual item is
/// removed. Instead of always pushing items after the previously pushed item, this data structure
/// will reuse space from previously removed entries when possible. This makes removal cheaper than
/// a standard `Vec<T>`, and means that a `Ptr` handed out by `push` stays valid until that exact
/// entry is removed.
#[derive(Debug, Clone)]
pub struct Slab<T> {
    items: Vec<Entry<T>>,
    /// The index of the first entry in the free list or Ptr::null() if the free list is empty
    ///
    /// The free list is a linked list stored in `items` that is used as a stack to track which
    /// entries have space that can be reused in calls to `push`.
    free_list_head: Ptr,
    /// The length of the free list
    free_len: usize,
}

impl<T> Default for Slab<T> {
    fn default() -> Self {
        Self {
            items: Vec::default(),
            free_list_head: Ptr::null(),
            free_len: 0,
        }
    }
}

impl<T> Slab<T> {
    /// Creates an empty slab
    ///
    /// The slab is initially created with a capacity of 0, so it will not allocate until it is
    /// first inserted into.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty slab with the specified capacity.
    ///
    /// The slab will be able to hold at least `capacity` elements without reallocating. If
    /// `capacity` is 0, the slab will not allocate.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            ..Self::default()
        }
    }

    /// Returns the number of entries in the slab that contain values
    ///
    /// This is the number of items pushed minus the number of items removed
    pub fn len(&self) -> usize {
        self.items.len() - self.free_len
    }

    /// Returns true if the slab is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of elements the slab can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Returns a reference to the value at `ptr`, or `None` if `ptr` is null, out of bounds or
    /// names a removed entry
    pub fn get(&self, ptr: Ptr) -> Option<&T> {
        match self.items.get(ptr.into_index()?)? {
            Entry::Occupied(value) => Some(value),
            Entry::Free {..} => None,
        }
    }

    /// Returns a mutable reference to the value at `ptr`, or `None` if there is no value there
    pub fn get_mut(&mut self, ptr: Ptr) -> Option<&mut T> {
        match self.items.get_mut(ptr.into_index()?)? {
            Entry::Occupied(value) => Some(value),
            Entry::Free {..} => None,
        }
    }

    /// Pushes a value into the slab and returns the pointer at which it was inserted.
    ///
    /// The item may be inserted at the end of the list, or in the space from an item was previously
    /// removed.
    pub fn push(&mut self, value: T) -> Ptr {
        // Check if we can reuse some space from the free list
        if let Some(free_list_head) = self.free_list_head.into_index() {
            let entry = &mut self.items[free_list_head];
            let next_free = match *entry {
                Entry::Free {next} => next,
                Entry::Occupied(_) => unreachable!("bug: occupied entry on the slab free list"),
            };
            *entry = Entry::Occupied(value);

            self.free_list_head = next_free;
            self.free_len -= 1;

            return Ptr(free_list_head);
        }

        let index = self.items.len();
        // Since we use `Ptr` for indexes, we can't have usize::MAX as a valid index into the slab
        if index == usize::MAX {
            panic!("cannot have more than usize::MAX - 1 entries in slab");
        }

        self.items.push(Entry::Occupied(value));

        Ptr(index)
    }

    /// Removes an item from the slab, returning its value, or `None` if there was no value at
    /// `ptr`.
    ///
    /// Note that this method has no effect on the allocated capacity of the slab. The space for the
    /// item will be reused in future calls to `push`. This does not move or modify any other
    /// entries in the slab.
    pub fn remove(&mut self, ptr: Ptr) -> Option<T> {
        let index = ptr.into_index()?;
        let entry = self.items.get_mut(index)?;
        if let Entry::Free {..} = entry {
            return None;
        }

        let prev = mem::replace(entry, Entry::Free {next: self.free_list_head});
        self.free_list_head = ptr;
        self.free_len += 1;

        match prev {
            Entry::Occupied(value) => Some(value),
            Entry::Free {..} => None,
        }
    }

    /// Clears the slab, removing all values.
    ///
    /// Note that this method has no effect on the allocated capacity of the slab.
    ///
    /// This invalidates all previous pointers returned from `push`.
    pub fn clear(&mut self) {
        self.items.clear();
        // Need to clear the free list so we don't end up indexing out of bounds into `items` now
        // that has been cleared
        self.free_list_head = Ptr::null();
        self.free_len = 0;
    }

    /// Reserves capacity for at least `additional` more elements to be inserted in the slab.
    pub fn reserve(&mut self, additional: usize) {
        self.items.reserve(additional)
    }

    /// Shrinks the capacity of the slab as much as possible.
    ///
    /// It will drop down as close as possible to the length but may still be greater.
    pub fn shrink_to_fit(&mut self) {
        self.items.shrink_to_fit()
    }
}

/// Panics if `ptr` does not name an occupied entry
impl<T> Index<Ptr> for Slab<T> {
    type Output = T;

    #[track_caller]
    fn index(&self, ptr: Ptr) -> &T {
        match self.get(ptr) {
            Some(value) => value,
            None => panic!("no slab entry at {:?}", ptr),
        }
    }
}

impl<T> IndexMut<Ptr> for Slab<T> {
    #[track_caller]
    fn index_mut(&mut self, ptr: Ptr) -> &mut T {
        match self.get_mut(ptr) {
            Some(value) => value,
            None => panic!("no slab entry at {:?}", ptr),
        }
    }
}
