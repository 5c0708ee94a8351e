// Thu Oct 15 2026 - Alex

use crate::memory::Address;
use ahash::AHashMap;
use std::collections::BTreeMap;

/// Line <-> address maps for navigation. The first line recorded for an
/// address wins; a line keeps the last address recorded for it.
#[derive(Debug, Clone, Default)]
pub struct AddressIndex {
    line_of_address: AHashMap<Address, usize>,
    address_of_line: BTreeMap<usize, Address>,
}

impl AddressIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, addr: Address, line: usize) {
        self.address_of_line.insert(line, addr);
        self.line_of_address
            .entry(addr)
            .and_modify(|first| {
                if line < *first {
                    *first = line;
                }
            })
            .or_insert(line);
    }

    pub fn first_line_of(&self, addr: Address) -> Option<usize> {
        self.line_of_address.get(&addr).copied()
    }

    pub fn address_of(&self, line: usize) -> Option<Address> {
        self.address_of_line.get(&line).copied()
    }

    /// Governing address of the closest tagged line at or above `line`.
    pub fn enclosing_address(&self, line: usize) -> Option<(usize, Address)> {
        self.address_of_line
            .range(..=line)
            .next_back()
            .map(|(l, a)| (*l, *a))
    }

    pub fn contains(&self, addr: Address) -> bool {
        self.line_of_address.contains_key(&addr)
    }

    pub fn len(&self) -> usize {
        self.address_of_line.len()
    }

    pub fn is_empty(&self) -> bool {
        self.address_of_line.is_empty()
    }

    pub fn lines(&self) -> impl Iterator<Item = (usize, Address)> + '_ {
        self.address_of_line.iter().map(|(l, a)| (*l, *a))
    }
}
