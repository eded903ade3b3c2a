/// The transport seam between the driver and the bus. The VIEWTEXT32 controller only ever needs a
/// single primitive: write a buffer of bytes to a device address.
pub trait DisplayInterface {
    type Error;

    fn write(&mut self, address: u8, bytes: &[u8]) -> Result<(), Self::Error>;
}

pub mod i2c {
    //! The I2C interface, built on the `embedded-hal` blocking I2C trait. Addresses are 7-bit;
    //! the driver passes through whatever address it was configured with.

    use embedded_hal::i2c::I2c;

    use super::DisplayInterface;

    #[derive(Debug)]
    pub struct I2cInterface<I2C> {
        /// The I2C master device the display is attached to.
        i2c: I2C,
    }

    impl<I2C> I2cInterface<I2C>
    where
        I2C: I2c,
    {
        /// Create a new I2C interface to communicate with the display controller.
        pub fn new(i2c: I2C) -> Self {
            Self { i2c }
        }

        /// Give back the underlying bus.
        pub fn release(self) -> I2C {
            self.i2c
        }
    }

    impl<I2C> DisplayInterface for I2cInterface<I2C>
    where
        I2C: I2c,
    {
        type Error = I2C::Error;

        fn write(&mut self, address: u8, bytes: &[u8]) -> Result<(), Self::Error> {
            self.i2c.write(address, bytes)
        }
    }

}
