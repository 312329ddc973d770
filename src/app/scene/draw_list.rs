/// Paint order for one layer. Later entries paint on top; there is no separate
/// z-index, so raising and lowering only ever reorder this list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DrawList<K> {
    order: Vec<K>,
}

impl<K: Copy + PartialEq> DrawList<K> {
    pub fn new() -> Self {
        Self { order: Vec::new() }
    }

    pub fn push(&mut self, item: K) {
        self.order.push(item);
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = K> + '_ {
        self.order.iter().copied()
    }

    pub fn position(&self, item: K) -> Option<usize> {
        self.order.iter().position(|entry| *entry == item)
    }

    pub fn contains(&self, item: K) -> bool {
        self.position(item).is_some()
    }

    pub fn remove(&mut self, item: K) -> bool {
        match self.position(item) {
            Some(index) => {
                self.order.remove(index);
                true
            }
            None => false,
        }
    }

    /// Inserts `item` directly below `anchor`, or at the bottom when `anchor`
    /// is absent.
    pub fn insert_before(&mut self, item: K, anchor: K) {
        self.remove(item);
        let index = self.position(anchor).unwrap_or(0);
        self.order.insert(index, item);
    }

    pub fn raise(&mut self, item: K) {
        if self.remove(item) {
            self.order.push(item);
        }
    }

    /// Moves every matching entry to the top, keeping their current relative
    /// order.
    pub fn raise_where(&mut self, mut matches: impl FnMut(K) -> bool) {
        let (raised, rest): (Vec<K>, Vec<K>) =
            self.order.iter().copied().partition(|item| matches(*item));
        self.order = rest;
        self.order.extend(raised);
    }

    /// Moves every matching entry to the bottom, keeping their current
    /// relative order.
    pub fn lower_where(&mut self, mut matches: impl FnMut(K) -> bool) {
        let (mut lowered, rest): (Vec<K>, Vec<K>) =
            self.order.iter().copied().partition(|item| matches(*item));
        lowered.extend(rest);
        self.order = lowered;
    }
}

impl<K: Copy + PartialEq> Default for DrawList<K> {
    fn default() -> Self {
        Self::new()
    }
}
