#![cfg(test)]

use std::any::Any;
use std::fmt::Display;
use std::rc::Rc;

use super::*;
use crate::util::alloc::CountedDrop;
use crate::util::panic::assert_panics_with;

#[test]
fn test_error_messages() {
    let error = NullPointerAccess::new();
    assert_eq!(error.to_string(), "Null pointer access attempt");
    assert_eq!(error, NullPointerAccess::default());

    let error = NullPointerAccess::with_message(format!("slot {} is empty", 3));
    assert_eq!(error.message(), "slot 3 is empty");
    assert_eq!(format!("{}", error), "slot 3 is empty");
}

#[test]
fn test_box_access() {
    let mut ptr = CheckedBox::new(5);
    assert!(ptr.is_some());
    assert!(!ptr.is_null());
    assert_eq!(*ptr, 5);

    *ptr += 1;
    assert_eq!(ptr.get(), Some(&6));
    *ptr.try_deref_mut().expect("pointer should be set") *= 2;
    assert_eq!(ptr.try_deref(), Ok(&12));

    let null = CheckedBox::<i32>::null();
    assert!(null.is_null());
    assert_eq!(null.get(), None);
    assert_eq!(null.try_deref(), Err(NullPointerAccess::new()));
    assert_eq!(format!("{:?}", null), "CheckedBox(null)");
    assert_eq!(format!("{:?}", ptr), "CheckedBox(12)");

    assert!(CheckedBox::<str>::default().is_null());
}

#[test]
fn test_null_box_panics() {
    assert_panics_with!(
        {
            let ptr = CheckedBox::<String>::null();
            let _ = ptr.len();
        },
        "Null pointer access attempt"
    );
    assert_panics_with!(
        {
            let mut ptr = CheckedBox::<Vec<u8>>::default();
            ptr.push(1);
        },
        "Null pointer access attempt"
    );
}

#[test]
fn test_box_ownership() {
    let drops = CountedDrop::counter();

    let mut ptr = CheckedBox::new(CountedDrop::new(&drops));
    ptr.reset();
    assert_eq!(drops.get(), 1, "reset should drop the held value.");
    assert!(ptr.is_null());

    ptr.reset_with(CountedDrop::new(&drops));
    let previous = ptr.replace(CountedDrop::new(&drops));
    assert_eq!(drops.get(), 1, "replace should hand back the previous value.");
    drop(previous);
    assert_eq!(drops.get(), 2);

    let released = ptr.release();
    assert!(ptr.is_null());
    assert_eq!(drops.get(), 2, "release shouldn't drop the value.");
    drop(released);
    assert_eq!(drops.get(), 3);

    let mut a = CheckedBox::new(1);
    let mut b = CheckedBox::null();
    a.swap(&mut b);
    assert!(a.is_null());
    assert_eq!(b.into_inner(), Some(1));

    let boxed = CheckedBox::from(Box::new("boxed")).into_box();
    assert_eq!(boxed.as_deref(), Some(&"boxed"));
    assert!(CheckedBox::<u8>::from(None).into_box().is_none());
}

#[test]
fn test_slice_box() {
    let mut slice = CheckedBox::<[i32]>::new_slice(4);
    assert_eq!(slice.len(), 4);
    assert_eq!(*slice, [0, 0, 0, 0]);

    slice[2] = 7;
    assert_eq!(slice[2], 7);
    assert_eq!(slice.try_index(2), Ok(Some(&7)));
    assert_eq!(slice.try_index(4), Ok(None));
    if let Ok(Some(value)) = slice.try_index_mut(0) {
        *value = -1;
    }
    assert_eq!(slice.iter().sum::<i32>(), 6);

    let slice = CheckedBox::from(vec!['a', 'b']);
    assert_eq!(slice[1], 'b');

    let null = CheckedBox::<[i32]>::null();
    assert_eq!(null.len(), 0);
    assert!(null.is_empty());
    assert_eq!(null.try_index(0), Err(NullPointerAccess::new()));

    assert_panics_with!(
        {
            let null = CheckedBox::<[i32]>::null();
            let _value = null[0];
        },
        "Null pointer access attempt"
    );
    assert_panics_with!(
        {
            let slice = CheckedBox::from_vec(vec![1, 2, 3]);
            let _value = slice[3];
        },
        "Index 3 out of bounds for collection with 3 elements!"
    );
}

#[test]
fn test_rc_sharing() {
    let drops = CountedDrop::counter();

    let first = CheckedRc::new(CountedDrop::new(&drops));
    let mut second = first.clone();
    assert_eq!(first.use_count(), 2);
    assert!(first.ptr_eq(&second));

    second.reset();
    assert_eq!(first.use_count(), 1);
    assert_eq!(second.use_count(), 0);
    assert_eq!(drops.get(), 0, "The value should live as long as its last owner.");

    drop(first);
    assert_eq!(drops.get(), 1);

    second.reset_with(CountedDrop::new(&drops));
    let rc = second.to_rc().expect("pointer should be set");
    assert_eq!(second.use_count(), 2);
    drop(rc);
    assert_eq!(second.into_rc().map(|rc| Rc::strong_count(&rc)), Some(1));
    assert_eq!(drops.get(), 2);
}

#[test]
fn test_rc_access() {
    let mut a = CheckedRc::new(String::from("shared"));
    assert_eq!(a.len(), 6);
    assert_eq!(a.get().map(String::as_str), Some("shared"));
    assert_eq!(format!("{:?}", a), "CheckedRc(\"shared\")");

    let mut b = CheckedRc::null();
    assert!(!a.ptr_eq(&b));
    a.swap(&mut b);
    assert!(a.is_null());
    assert!(b.is_some());
    assert!(CheckedRc::<u8>::null().ptr_eq(&CheckedRc::default()));

    let from_box = CheckedRc::from(CheckedBox::new(3));
    assert_eq!(*from_box, 3);
    assert!(CheckedRc::from(CheckedBox::<u8>::null()).is_null());
    assert_eq!(CheckedRc::from(Rc::new(1)).use_count(), 1);

    assert_panics_with!(
        {
            let null = CheckedRc::<String>::null();
            let _ = null.len();
        },
        "Null pointer access attempt"
    );
}

#[test]
fn test_rc_casts() {
    let number = CheckedRc::new(10_u32);
    let display: CheckedRc<dyn Display> = number.clone().cast(|rc| rc as Rc<dyn Display>);
    assert_eq!(display.to_string(), "10");
    assert_eq!(number.use_count(), 2, "Casting should share the allocation.");

    let null: CheckedRc<dyn Display> = CheckedRc::<u32>::null().cast(|rc| rc as Rc<dyn Display>);
    assert!(null.is_null());

    let any: CheckedRc<dyn Any> = number.cast(|rc| rc as Rc<dyn Any>);
    let back = any.downcast::<u32>();
    assert_eq!(*back, 10);
    assert_eq!(any.use_count(), 3);

    assert!(any.downcast::<i64>().is_null(), "A failed downcast should be null.");
    assert!(any.is_some(), "A failed downcast should leave the source untouched.");
    assert!(CheckedRc::<dyn Any>::null().downcast::<u32>().is_null());
}
