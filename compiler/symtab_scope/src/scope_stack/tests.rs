use super::*;

#[test]
fn push_and_pop() {
    let root = ScopeId::new(1);
    let mut stack = ScopeStack::new(root);
    assert_eq!(stack.current(), root);
    assert_eq!(stack.depth(), 0);

    stack.push(ScopeId::new(2));
    stack.push(ScopeId::new(3));
    assert_eq!(stack.current(), ScopeId::new(3));
    assert_eq!(stack.depth(), 2);

    assert_eq!(stack.pop(), Some(ScopeId::new(3)));
    assert_eq!(stack.current(), ScopeId::new(2));
}

#[test]
fn root_is_never_popped() {
    let root = ScopeId::new(0);
    let mut stack = ScopeStack::new(root);
    assert_eq!(stack.pop(), None);
    assert_eq!(stack.current(), root);
}
