// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::DomainError;

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::EmptyProduct { index: 2 };
    assert_eq!(format!("{err}"), "Order item 2: product cannot be empty");

    let err: DomainError = DomainError::QuantityOutOfRange {
        index: 0,
        quantity: 0,
    };
    assert_eq!(
        format!("{err}"),
        "Order item 0: quantity 0 must be between 1 and 1000000"
    );

    let err: DomainError = DomainError::InvalidSize(String::from("huge"));
    assert_eq!(
        format!("{err}"),
        "Invalid size: 'huge'. Must be one of: small, medium, big"
    );

    let err: DomainError = DomainError::NilScheduleId;
    assert_eq!(
        format!("{err}"),
        "Schedule identifier cannot be the nil UUID"
    );
}
