#![doc = include_str!("../README.md")]

pub use self::{
    compare::{constant_time_equal, constant_time_equal_str},
    error::{InvalidEncoding, UnmaskError},
    mask::{mask_secret, unmask_secret, MaskedSecret, MaskedSecretRef, Secret},
    otp::{decrypt_once, encrypt_once},
};

mod compare;
mod error;
mod mask;
mod otp;
