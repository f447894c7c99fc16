//! Per-cell Hermite data for the cubic kernel.
//!
//! Each cell owns `4^N` numbers: for every corner, the sample and its first
//! and mixed first derivatives, each scaled by the widths of the cell along
//! the differentiated axes. Along one axis the four digits are
//! `[f(lo), h f'(lo), f(hi), h f'(hi)]`, matching
//! [`crate::interpolation::helpers::hermite_basis`].
//!
//! Slots are write-once. A slot is filled on first access, or every slot is
//! filled up front by [`CoefficientCache::populate`]; concurrent first
//! access to one slot runs a single initialiser.

use std::sync::OnceLock;

use rayon::prelude::*;

use crate::interpolation::grid::Grid;
use crate::interpolation::helpers::{next_multi_index, row_major_strides};


#[derive(Debug)]
pub(crate) struct CoefficientCache<const N: usize> {
    cells:   [usize; N],
    strides: [usize; N],
    slots:   Box<[OnceLock<Box<[f64]>>]>,
}

impl<const N: usize> CoefficientCache<N> {
    /// Empty cache sized to the cells of `grid`.
    pub(crate) fn new(grid: &Grid<N>) -> Self {
        let cells: [usize; N] = std::array::from_fn(|a| grid.axis(a).n_cells());
        let n_slots = cells.iter().product();
        let slots = (0..n_slots).map(|_| OnceLock::new()).collect();
        Self { cells, strides: row_major_strides(&cells), slots }
    }

    /// Hermite data of `cell`, computed on first access.
    #[inline]
    pub(crate) fn get(&self, grid: &Grid<N>, cell: &[usize; N]) -> &[f64] {
        let slot = &self.slots[self.slot_index(cell)];
        slot.get_or_init(|| hermite_data(grid, cell))
    }

    /// Fills every slot, in parallel.
    pub(crate) fn populate(&self, grid: &Grid<N>) {
        self.slots.par_iter().enumerate().for_each(|(flat, slot)| {
            let cell = self.cell_of(flat);
            slot.get_or_init(|| hermite_data(grid, &cell));
        });
        log::debug!("populated {} cubic cells", self.slots.len());
    }

    /// Number of slots filled so far.
    #[cfg(test)]
    pub(crate) fn populated(&self) -> usize {
        self.slots.iter().filter(|s| s.get().is_some()).count()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize { self.slots.len() }

    #[inline]
    fn slot_index(&self, cell: &[usize; N]) -> usize {
        cell.iter().zip(self.strides.iter()).map(|(c, s)| c * s).sum()
    }

    fn cell_of(&self, mut flat: usize) -> [usize; N] {
        let mut cell = [0usize; N];
        for a in 0..N {
            cell[a] = flat / self.strides[a];
            flat   %= self.strides[a];
        }
        debug_assert!(cell.iter().zip(self.cells.iter()).all(|(c, n)| c < n));
        cell
    }
}


/// Builds the `4^N` Hermite data of one cell, row-major over base-4 digits.
fn hermite_data<const N: usize>(grid: &Grid<N>, cell: &[usize; N]) -> Box<[f64]> {
    let widths: [f64; N] = std::array::from_fn(|a| grid.axis(a).width(cell[a]));
    let extent = [4usize; N];

    let mut data  = Vec::with_capacity(4usize.pow(N as u32));
    let mut digit = [0usize; N];
    loop {
        let mut node  = [0usize; N];
        let mut order = [0usize; N];
        let mut scale = [1.0; N];
        for a in 0..N {
            node[a]  = cell[a] + digit[a] / 2;
            order[a] = digit[a] % 2;
            if order[a] == 1 {
                scale[a] = widths[a];
            }
        }
        data.push(grid.scaled_derivative(&node, &order, &scale));

        if !next_multi_index(&mut digit, &extent) {
            break;
        }
    }

    data.into_boxed_slice()
}
