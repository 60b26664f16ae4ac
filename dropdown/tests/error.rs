use dropdown::prelude::*;
use hostdom::MediaEnvironment;

// ============================================================================
// Context lookup
// ============================================================================

#[test]
fn test_option_outside_dropdown_fails() {
    let err = Mounted::attach(DropdownOption::new().text("orphan"), &Scope::root()).unwrap_err();
    assert_eq!(
        err,
        DropdownError::OutsideDropdown {
            component: "DropdownOption"
        }
    );
    assert_eq!(err.to_string(), "DropdownOption must be used inside a dropdown");
}

#[test]
fn test_use_dropdown_outside_fails() {
    assert!(matches!(
        use_dropdown(&Scope::root()),
        Err(DropdownError::OutsideDropdown { .. })
    ));
}

#[test]
fn test_use_dropdown_inside_returns_context() {
    let env = MediaEnvironment::default();
    let dropdown = Dropdown::new(DropdownProps::new(), &env);
    let scope = dropdown.scope(&Scope::root());

    let context = use_dropdown(&scope).unwrap();
    assert_eq!(context.dropdown_id(), dropdown.id());

    context.open();
    assert!(dropdown.is_open());
}

// ============================================================================
// Detached options
// ============================================================================

#[test]
fn test_activate_detached_option_fails() {
    let option = DropdownOption::new().text("loose");
    assert_eq!(option.activate(), Err(DropdownError::NotAttached(option.id())));
}

#[test]
fn test_detached_option_is_not_selected() {
    let env = MediaEnvironment::default();
    let dropdown = Dropdown::new(DropdownProps::new().default_value("a"), &env);
    let scope = dropdown.scope(&Scope::root());
    let option = Mounted::attach(DropdownOption::new().text("a"), &scope)
        .unwrap()
        .detach();

    assert!(!option.is_selected());
    assert!(dropdown.options().is_empty());
}

// ============================================================================
// Unregistered values
// ============================================================================

#[test]
fn test_select_unknown_value_fails_and_stays_open() {
    let env = MediaEnvironment::default();
    let dropdown = Dropdown::new(DropdownProps::new().default_value("a"), &env);
    let scope = dropdown.scope(&Scope::root());
    let _a = Mounted::attach(DropdownOption::new().text("a"), &scope).unwrap();
    let _b = Mounted::attach(DropdownOption::new().text("b"), &scope).unwrap();

    dropdown.open();
    let err = dropdown.select("zzz".into()).unwrap_err();
    assert_eq!(err, DropdownError::UnknownValue(OptionValue::from("zzz")));
    assert_eq!(err.to_string(), "no option carries the value 'zzz'");
    assert!(dropdown.is_open());
    assert_eq!(dropdown.value(), Some(OptionValue::from("a")));

    dropdown.select("b".into()).unwrap();
    assert!(!dropdown.is_open());
    assert_eq!(dropdown.value(), Some(OptionValue::from("b")));
}

#[test]
fn test_context_set_value_rejects_unknown_value() {
    let env = MediaEnvironment::default();
    let dropdown = Dropdown::new(DropdownProps::new(), &env);
    let scope = dropdown.scope(&Scope::root());
    let _option = Mounted::attach(DropdownOption::new().value(30), &scope).unwrap();
    let context = use_dropdown(&scope).unwrap();

    // Strict comparison: text "30" is not the number 30
    assert_eq!(
        context.set_value("30".into()),
        Err(DropdownError::UnknownValue(OptionValue::from("30")))
    );
    assert_eq!(dropdown.value(), None);
    assert_eq!(context.set_value(OptionValue::Number(30)), Ok(()));
    assert_eq!(dropdown.value(), Some(OptionValue::Number(30)));
}
