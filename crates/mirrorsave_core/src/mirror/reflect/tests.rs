use std::collections::HashMap;
use std::sync::Arc;

use crate::mirror::test_support::{User, superman};
use crate::mirror::{Composite, FieldDescriptor, MappingKey, Primitive, Reflect, short_type_name};

#[test]
fn short_type_name_strips_path_and_generics() {
	assert_eq!(short_type_name("app::models::User"), "User");
	assert_eq!(short_type_name("app::Wrapper<alloc::string::String>"), "Wrapper");
	assert_eq!(short_type_name("Plain"), "Plain");
}

#[test]
fn composite_macro_registers_declared_name_and_fields() {
	let user = superman();
	assert_eq!(User::declared_name(), "User");

	let fields = user.fields();
	let names: Vec<_> = fields.iter().map(|field| field.name).collect();
	assert_eq!(names, ["id", "username", "email", "avatarFile"]);
	assert!(!fields[0].optional);
	assert!(fields[3].optional, "Option fields are flagged optional");
}

#[test]
fn field_descriptor_flags_optional_wrappers() {
	let present = Some(3_u8);
	let plain = 3_u8;
	assert!(FieldDescriptor::new("a", &present).optional);
	assert!(!FieldDescriptor::new("b", &plain).optional);
}

#[test]
fn primitives_report_leaf_payloads() {
	assert_eq!((-4_i16).as_primitive(), Primitive::I64(-4));
	assert_eq!(9_usize.as_primitive(), Primitive::U64(9));
	assert_eq!(true.as_primitive(), Primitive::Bool(true));
	assert_eq!("text".to_owned().as_primitive(), Primitive::Str("text"));
	assert_eq!(1.5_f32.as_primitive(), Primitive::F64(1.5));
}

#[test]
fn vec_exposes_indexed_elements() {
	let items = vec![10_u32, 20, 30];
	let sequence = items.as_sequence().expect("vec is a sequence");
	assert_eq!(sequence.len(), 3);
	assert_eq!(sequence.element(1).map(|item| item.as_primitive()), Some(Primitive::U64(20)));
	assert!(sequence.element(3).is_none());
}

#[test]
fn hash_map_renders_keys() {
	let map = HashMap::from([(7_u16, "seven".to_owned())]);
	let entries = map.as_mapping().expect("map is a mapping").entries();
	assert_eq!(entries.len(), 1);
	assert_eq!(entries[0].0, "7");
	assert_eq!(entries[0].1.as_primitive(), Primitive::Str("seven"));
	assert_eq!('k'.key_string(), "k");
}

#[test]
fn smart_pointers_forward_capabilities() {
	let boxed: Box<User> = Box::new(superman());
	let shared = Arc::new(vec![1_u8]);
	let borrowed = &boxed;

	assert!(boxed.as_composite().is_some());
	assert!(borrowed.as_composite().is_some());
	assert!(shared.as_sequence().is_some());
	assert!(Box::new(Some(1_u8)).as_optional().is_some());
}
