mod tests {
    use embassy_time::{Duration, Instant};
    use menorah_light_composer::intent::{from_gesture, interpret};
    use menorah_light_composer::sensor::{ProximityHold, QueueFull};
    use menorah_light_composer::{
        Gesture, GestureConfig, GestureQueue, GestureSensor, MenorahIntent, Phase, SensorInput,
        SensorPoller,
    };

    fn at(ms: u64) -> Instant {
        Instant::from_millis(ms)
    }

    /// Sensor whose bus is gone
    struct BrokenSensor {
        reads: usize,
    }

    impl GestureSensor for BrokenSensor {
        type Error = &'static str;

        fn read_gesture(&mut self) -> Result<Gesture, Self::Error> {
            self.reads += 1;
            Err("i2c nack")
        }

        fn read_proximity(&mut self) -> Result<u8, Self::Error> {
            self.reads += 1;
            Err("i2c nack")
        }
    }

    #[test]
    fn test_gesture_from_raw() {
        assert_eq!(Gesture::from_raw(0x01), Gesture::Up);
        assert_eq!(Gesture::from_raw(0x02), Gesture::Down);
        assert_eq!(Gesture::from_raw(0x03), Gesture::Left);
        assert_eq!(Gesture::from_raw(0x04), Gesture::Right);
        assert_eq!(Gesture::from_raw(0x00), Gesture::None);
        assert_eq!(Gesture::from_raw(0x7f), Gesture::None);
        assert!(!Gesture::None.is_some());
    }

    #[test]
    fn test_sensor_errors_read_as_no_input() {
        let mut poller = SensorPoller::new(&GestureConfig::default(), at(0));
        let mut sensor = BrokenSensor { reads: 0 };

        for ms in (0..5_000).step_by(20) {
            assert_eq!(poller.poll(&mut sensor, at(ms)), SensorInput::default());
        }
        assert!(sensor.reads > 0);
    }

    #[test]
    fn test_gesture_cooldown() {
        let queue: GestureQueue<4> = GestureQueue::new();
        let mut sensor = queue.sensor();
        let mut poller = SensorPoller::new(&GestureConfig::default(), at(0));
        assert!(queue.push(Gesture::Up).is_ok());
        assert!(queue.push(Gesture::Down).is_ok());

        // Cooldown runs from startup; gestures stay queued meanwhile
        assert_eq!(poller.poll(&mut sensor, at(100)).gesture, Gesture::None);
        assert_eq!(poller.poll(&mut sensor, at(500)).gesture, Gesture::Up);
        assert_eq!(poller.poll(&mut sensor, at(600)).gesture, Gesture::None);
        assert_eq!(poller.poll(&mut sensor, at(1000)).gesture, Gesture::Down);
        assert_eq!(poller.poll(&mut sensor, at(1600)).gesture, Gesture::None);
    }

    #[test]
    fn test_poll_interval() {
        let queue: GestureQueue<4> = GestureQueue::new();
        let mut sensor = queue.sensor();
        let config = GestureConfig {
            cooldown: Duration::from_millis(0),
            ..GestureConfig::default()
        };
        let mut poller = SensorPoller::new(&config, at(0));
        assert!(queue.push(Gesture::Left).is_ok());
        assert!(queue.push(Gesture::Right).is_ok());

        assert_eq!(poller.poll(&mut sensor, at(0)).gesture, Gesture::Left);
        assert_eq!(poller.poll(&mut sensor, at(10)).gesture, Gesture::None);
        assert_eq!(poller.poll(&mut sensor, at(20)).gesture, Gesture::Right);
    }

    #[test]
    fn test_proximity_hold_through_poller() {
        let queue: GestureQueue<4> = GestureQueue::new();
        let mut sensor = queue.sensor();
        let mut poller = SensorPoller::new(&GestureConfig::default(), at(0));

        queue.set_proximity(50);
        assert!(!poller.poll(&mut sensor, at(0)).proximity_hold);
        assert!(!poller.poll(&mut sensor, at(1000)).proximity_hold);
        assert!(poller.poll(&mut sensor, at(3000)).proximity_hold);
        assert!(!poller.poll(&mut sensor, at(3020)).proximity_hold);

        queue.set_proximity(0);
        assert!(!poller.poll(&mut sensor, at(3040)).proximity_hold);
        queue.set_proximity(50);
        assert!(!poller.poll(&mut sensor, at(3060)).proximity_hold);
        assert!(poller.poll(&mut sensor, at(6060)).proximity_hold);
    }

    #[test]
    fn test_proximity_hold_fires_once() {
        let mut hold = ProximityHold::new(10, Duration::from_millis(3000));
        assert!(!hold.is_present());
        assert!(!hold.update(9, at(0)));
        assert!(!hold.is_present());

        assert!(!hold.update(10, at(100)));
        assert!(hold.is_present());
        assert!(!hold.update(200, at(3099)));
        assert!(hold.update(200, at(3100)));
        assert!(!hold.update(200, at(9000)));

        // Leaving early restarts the hold
        assert!(!hold.update(0, at(9100)));
        assert!(!hold.update(40, at(9200)));
        assert!(!hold.update(0, at(11_000)));
        assert!(!hold.update(40, at(12_300)));
        assert!(!hold.update(40, at(15_000)));
        assert!(hold.update(40, at(15_300)));
    }

    #[test]
    fn test_gesture_queue() {
        let queue: GestureQueue<2> = GestureQueue::new();
        assert_eq!(queue.pop(), Gesture::None);

        assert!(queue.push(Gesture::None).is_ok());
        assert_eq!(queue.pop(), Gesture::None);

        assert!(queue.push(Gesture::Up).is_ok());
        assert!(queue.push(Gesture::Right).is_ok());
        assert_eq!(queue.push(Gesture::Down), Err(QueueFull(Gesture::Down)));

        assert_eq!(queue.pop(), Gesture::Up);
        assert_eq!(queue.pop(), Gesture::Right);
        assert_eq!(queue.pop(), Gesture::None);

        queue.set_proximity(77);
        assert_eq!(queue.proximity(), 77);
    }

    #[test]
    fn test_gestures_by_phase() {
        assert_eq!(
            from_gesture(Phase::Selection, Gesture::Up),
            Some(MenorahIntent::NextNight)
        );
        assert_eq!(
            from_gesture(Phase::Selection, Gesture::Down),
            Some(MenorahIntent::PreviousNight)
        );
        assert_eq!(
            from_gesture(Phase::Selection, Gesture::Right),
            Some(MenorahIntent::ConfirmNight)
        );
        assert_eq!(from_gesture(Phase::Selection, Gesture::Left), None);
        assert_eq!(
            from_gesture(Phase::Lighting, Gesture::Down),
            Some(MenorahIntent::IgniteNext)
        );
        assert_eq!(from_gesture(Phase::Lighting, Gesture::Right), None);
        assert_eq!(
            from_gesture(Phase::Burning, Gesture::Up),
            Some(MenorahIntent::BrightnessUp)
        );
        assert_eq!(
            from_gesture(Phase::Burning, Gesture::Down),
            Some(MenorahIntent::BrightnessDown)
        );
        assert_eq!(from_gesture(Phase::Extinguished, Gesture::Up), None);
        assert_eq!(from_gesture(Phase::Burning, Gesture::None), None);
    }

    #[test]
    fn test_proximity_hold_rekindles_only_when_extinguished() {
        let hold = SensorInput {
            gesture: Gesture::None,
            proximity_hold: true,
        };
        assert_eq!(interpret(Phase::Extinguished, hold), Some(MenorahIntent::Rekindle));
        assert_eq!(interpret(Phase::Burning, hold), None);
        assert_eq!(interpret(Phase::Selection, hold), None);
    }
}
