//! Definitions for SPCR, the Serial Port Console Redirection table.
//!
//! The SPCR interface type field uses the same values as the DBG2 serial port subtypes.

#![no_std]

use sdt::AcpiSignature;

pub const SPCR_SIGNATURE: &AcpiSignature = b"SPCR";
pub const SPCR_REVISION: u8 = 2;
