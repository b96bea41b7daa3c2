//! Register-map I2C bus for driver tests

use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, Operation};

/// One device with 256 byte-wide registers and an auto-incrementing pointer
pub struct FakeBus {
    pub address: u8,
    pub regs: [u8; 256],
    pub fail: bool,
    pointer: u8,
}

impl FakeBus {
    pub fn new(address: u8) -> Self {
        Self {
            address,
            regs: [0; 256],
            fail: false,
            pointer: 0,
        }
    }
}

impl ErrorType for FakeBus {
    type Error = ErrorKind;
}

impl I2c for FakeBus {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        if self.fail || address != self.address {
            return Err(ErrorKind::Other);
        }
        for op in operations {
            match op {
                Operation::Write(bytes) => {
                    if let Some((&reg, data)) = bytes.split_first() {
                        self.pointer = reg;
                        for &byte in data {
                            self.regs[usize::from(self.pointer)] = byte;
                            self.pointer = self.pointer.wrapping_add(1);
                        }
                    }
                }
                Operation::Read(buf) => {
                    for byte in buf.iter_mut() {
                        *byte = self.regs[usize::from(self.pointer)];
                        self.pointer = self.pointer.wrapping_add(1);
                    }
                }
            }
        }
        Ok(())
    }
}
