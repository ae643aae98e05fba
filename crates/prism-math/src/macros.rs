//! Componentwise operator impls shared by the vector and normal types.

/// Implements `+ - += -=`, unary `-`, and scalar `* / *= /=` for a tuple
/// type whose constructor is `new(field, ...)`, plus `scalar * tuple` for the
/// concrete scalar types.
macro_rules! impl_componentwise_ops {
    ($name:ident { $($field:ident),+ }) => {
        impl<T: Scalar> std::ops::Add for $name<T> {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self {
                Self::new($(self.$field + rhs.$field),+)
            }
        }

        impl<T: Scalar> std::ops::AddAssign for $name<T> {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                $(self.$field += rhs.$field;)+
            }
        }

        impl<T: Scalar> std::ops::Sub for $name<T> {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self {
                Self::new($(self.$field - rhs.$field),+)
            }
        }

        impl<T: Scalar> std::ops::SubAssign for $name<T> {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                $(self.$field -= rhs.$field;)+
            }
        }

        impl<T: Scalar> std::ops::Neg for $name<T> {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                Self::new($(-self.$field),+)
            }
        }

        impl<T: Scalar> std::ops::Mul<T> for $name<T> {
            type Output = Self;

            #[inline]
            fn mul(self, s: T) -> Self {
                Self::new($(self.$field * s),+)
            }
        }

        impl<T: Scalar> std::ops::MulAssign<T> for $name<T> {
            #[inline]
            fn mul_assign(&mut self, s: T) {
                $(self.$field *= s;)+
            }
        }

        impl<T: Scalar> std::ops::Div<T> for $name<T> {
            type Output = Self;

            #[inline]
            fn div(self, s: T) -> Self {
                debug_assert!(s != T::zero(), "{} divided by zero", stringify!($name));
                Self::new($(self.$field / s),+)
            }
        }

        impl<T: Scalar> std::ops::DivAssign<T> for $name<T> {
            #[inline]
            fn div_assign(&mut self, s: T) {
                debug_assert!(s != T::zero(), "{} divided by zero", stringify!($name));
                $(self.$field /= s;)+
            }
        }

        impl_scalar_lhs_mul!($name, f32, f64, i32, i64);
    };
}

/// `s * tuple` for each listed concrete scalar type.
macro_rules! impl_scalar_lhs_mul {
    ($name:ident, $($t:ty),+) => {$(
        impl std::ops::Mul<$name<$t>> for $t {
            type Output = $name<$t>;

            #[inline]
            fn mul(self, rhs: $name<$t>) -> $name<$t> {
                rhs * self
            }
        }
    )+};
}

/// `Index`/`IndexMut` over the named fields, panicking when out of range.
macro_rules! impl_component_index {
    ($name:ident { $($idx:literal => $field:ident),+ }) => {
        impl<T> std::ops::Index<usize> for $name<T> {
            type Output = T;

            #[inline]
            fn index(&self, i: usize) -> &T {
                match i {
                    $($idx => &self.$field,)+
                    _ => panic!("{} index {} out of range", stringify!($name), i),
                }
            }
        }

        impl<T> std::ops::IndexMut<usize> for $name<T> {
            #[inline]
            fn index_mut(&mut self, i: usize) -> &mut T {
                match i {
                    $($idx => &mut self.$field,)+
                    _ => panic!("{} index {} out of range", stringify!($name), i),
                }
            }
        }
    };
}
