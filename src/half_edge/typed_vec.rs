/// Defines an index newtype together with a vector that can only be indexed by it.
///
/// The vector hands out its own indices on `push`, which is how node identities
/// stay dense and in insertion order.
#[macro_export]
macro_rules! define_indexed_vec {
    (
        $(#[$idx_meta:meta])*
        $idx_vis:vis struct $Idx:ident ;

        $(#[$vec_meta:meta])*
        $vec_vis:vis struct $Vec:ident ;
    ) => {
        /* ——————————————————— index new‑type ——————————————————— */

        $(#[$idx_meta])*
        #[derive(
            Clone,
            Copy,
            Debug,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            ::derive_more::Display,
            ::derive_more::From,
            ::derive_more::Into,
        )]
        $idx_vis struct $Idx(pub usize);

        /* ——————————————————— vector new‑type ——————————————————— */

        $(#[$vec_meta])*
        #[derive(Clone, Debug, PartialEq)]
        $vec_vis struct $Vec<T>(::std::vec::Vec<T>);

        impl<T> ::std::ops::Index<$Idx> for $Vec<T> {
            type Output = T;
            #[inline] fn index(&self, i: $Idx) -> &Self::Output { &self.0[i.0] }
        }
        impl<T> ::std::ops::IndexMut<$Idx> for $Vec<T> {
            #[inline] fn index_mut(&mut self, i: $Idx) -> &mut Self::Output { &mut self.0[i.0] }
        }

        #[allow(clippy::len_without_is_empty)]
        impl<T> $Vec<T> {
            #[inline] pub fn new() -> Self { Self(::std::vec::Vec::new()) }
            #[inline] pub fn with_capacity(c: usize) -> Self { Self(::std::vec::Vec::with_capacity(c)) }

            #[inline] pub fn len(&self) -> usize { self.0.len() }

            /// Appends `value` and returns the index it was stored at.
            #[inline] pub fn push(&mut self, value: T) -> $Idx {
                let idx = $Idx(self.0.len());
                self.0.push(value);
                idx
            }

            #[inline] pub fn contains_index(&self, idx: $Idx) -> bool { idx.0 < self.0.len() }

            #[inline] pub fn get(&self, idx: $Idx) -> Option<&T> { self.0.get(idx.0) }

            #[inline] pub fn iter<'a>(&'a self) -> ::std::iter::Map<std::iter::Enumerate<std::slice::Iter<'a, T>>, fn((usize, &T)) -> ($Idx, &T)> {
                self.0.iter().enumerate().map(|(u, t)| ($Idx(u), t))
            }

            #[inline] pub fn values(&self) -> ::std::slice::Iter<'_, T> { self.0.iter() }
        }
    };
}
