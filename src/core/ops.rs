//! Std operator overloads routed through [`VectorSpace`] and [`InnerProductSpace`].
//!
//! `impl_vector_ops!(Type; f32, f64)` wires up, for `Type<T>`:
//! - `-v` and `-&v`
//! - `a + b` and `&a + &b`, yielding `Result<Type<T>>`
//! - `a - b` and `&a - &b`, yielding `Result<Type<T>>` (derived through `try_sub`)
//! - `v * s` (derived through `scale_right`)
//! - `s * v` and `s * &v` for each listed concrete scalar
//! - `&a * &b`, the dot product, yielding `Result<T>`
//!
//! [`VectorSpace`]: crate::core::traits::VectorSpace
//! [`InnerProductSpace`]: crate::core::traits::InnerProductSpace

macro_rules! impl_vector_ops {
    ($vector:ident; $($scalar:ty),*) => {
        impl<T: $crate::core::traits::Scalar> ::std::ops::Neg for $vector<T> {
            type Output = $vector<T>;
            fn neg(self) -> $vector<T> {
                $crate::core::traits::VectorSpace::negate(&self)
            }
        }

        impl<T: $crate::core::traits::Scalar> ::std::ops::Neg for &$vector<T> {
            type Output = $vector<T>;
            fn neg(self) -> $vector<T> {
                $crate::core::traits::VectorSpace::negate(self)
            }
        }

        impl<T: $crate::core::traits::Scalar> ::std::ops::Add for $vector<T> {
            type Output = $crate::error::Result<$vector<T>>;
            fn add(self, rhs: $vector<T>) -> Self::Output {
                $crate::core::traits::VectorSpace::try_add(&self, &rhs)
            }
        }

        impl<'a, T: $crate::core::traits::Scalar> ::std::ops::Add<&'a $vector<T>> for &'a $vector<T> {
            type Output = $crate::error::Result<$vector<T>>;
            fn add(self, rhs: &'a $vector<T>) -> Self::Output {
                $crate::core::traits::VectorSpace::try_add(self, rhs)
            }
        }

        impl<T: $crate::core::traits::Scalar> ::std::ops::Sub for $vector<T> {
            type Output = $crate::error::Result<$vector<T>>;
            fn sub(self, rhs: $vector<T>) -> Self::Output {
                $crate::core::traits::VectorSpace::try_sub(&self, &rhs)
            }
        }

        impl<'a, T: $crate::core::traits::Scalar> ::std::ops::Sub<&'a $vector<T>> for &'a $vector<T> {
            type Output = $crate::error::Result<$vector<T>>;
            fn sub(self, rhs: &'a $vector<T>) -> Self::Output {
                $crate::core::traits::VectorSpace::try_sub(self, rhs)
            }
        }

        impl<T: $crate::core::traits::Scalar> ::std::ops::Mul<T> for $vector<T> {
            type Output = $vector<T>;
            fn mul(self, rhs: T) -> $vector<T> {
                $crate::core::traits::VectorSpace::scale_right(&self, rhs)
            }
        }

        impl<'a, T: $crate::core::traits::Scalar> ::std::ops::Mul<&'a $vector<T>> for &'a $vector<T> {
            type Output = $crate::error::Result<T>;
            fn mul(self, rhs: &'a $vector<T>) -> Self::Output {
                $crate::core::traits::InnerProductSpace::try_dot(self, rhs)
            }
        }

        $(
            impl ::std::ops::Mul<$vector<$scalar>> for $scalar {
                type Output = $vector<$scalar>;
                fn mul(self, rhs: $vector<$scalar>) -> $vector<$scalar> {
                    $crate::core::traits::VectorSpace::scale(&rhs, self)
                }
            }

            impl<'a> ::std::ops::Mul<&'a $vector<$scalar>> for $scalar {
                type Output = $vector<$scalar>;
                fn mul(self, rhs: &'a $vector<$scalar>) -> $vector<$scalar> {
                    $crate::core::traits::VectorSpace::scale(rhs, self)
                }
            }
        )*
    };
}

pub(crate) use impl_vector_ops;
