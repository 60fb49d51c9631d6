//! CPU abstraction

/// CPU-specific operations
///
/// Idling until the next key is the keyboard's job
/// ([`KeyboardDevice::wait_event`](crate::KeyboardDevice::wait_event)). The
/// console only reaches the CPU on `shutdown`.
pub trait CpuHal {
    /// Requests platform power-off. Does not return control to the console.
    fn power_off(&mut self);

    /// Returns true once `power_off` has been requested
    fn is_powered_off(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct FakeCpu {
        off: bool,
    }

    impl CpuHal for FakeCpu {
        fn power_off(&mut self) {
            self.off = true;
        }

        fn is_powered_off(&self) -> bool {
            self.off
        }
    }

    #[test]
    fn test_fake_cpu() {
        let mut cpu = FakeCpu::default();
        assert!(!cpu.is_powered_off());
        cpu.power_off();
        assert!(cpu.is_powered_off());
    }
}
