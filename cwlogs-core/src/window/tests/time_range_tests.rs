use crate::window::TimeRange;

#[test]
fn duration_is_the_distance_between_bounds() {
    // Arrange
    let range = TimeRange::new(1_700_000_000_000, 1_700_003_600_000);

    // Act
    let duration = range.duration_ms();

    // Assert
    assert_eq!(duration, 3_600_000);
}
