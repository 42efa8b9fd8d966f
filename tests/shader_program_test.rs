use std::cell::RefCell;
use std::rc::Rc;

use prism_ngin::graphics::{GraphicsError, GraphicsObject, ShaderProgram};
use prism_ngin::math::IDENTITY_MATRIX;

use crate::common::test_utils::{linked_program, RecordingApi, RecordingObject};

mod common;

#[test]
fn should_link_when_both_stages_compile() {
    let api = RecordingApi::new();
    let program = linked_program(&api, 1);

    assert!(program.is_linked());
    let calls = api.calls();
    assert!(calls[0].starts_with("create_program()"));
    assert!(calls[1].starts_with("create_shader(Vertex)"));
    assert!(calls[2].starts_with("create_shader(Fragment)"));
}

#[test]
fn should_stay_unlinked_on_compile_failure() {
    let api = RecordingApi::new();
    api.fail_compile.set(true);

    let mut program = ShaderProgram::new(api.clone(), 1).expect("program creation");
    program.create_vertex_shader("broken source");
    program.create_fragment_shader("broken source");
    program.attach_shaders();

    // The failure is reported through the status bit, not an error.
    assert!(!program.is_linked());
}

#[test]
fn should_stay_unlinked_on_link_failure() {
    let api = RecordingApi::new();

    let mut program = ShaderProgram::new(api.clone(), 1).expect("program creation");
    program.create_vertex_shader("vertex source");
    program.create_fragment_shader("fragment source");
    api.fail_link.set(true);
    program.attach_shaders();

    assert!(!program.is_linked());
}

#[test]
fn should_attach_shared_matrices_before_drawing_objects() {
    let api = RecordingApi::new();
    let mut program = linked_program(&api, 1);

    let events = Rc::new(RefCell::new(Vec::new()));
    program.set_graphics_objects(vec![
        Box::new(RecordingObject::new(10, events.clone())),
        Box::new(RecordingObject::new(11, events.clone())),
    ]);

    api.take_calls();
    program
        .render(&IDENTITY_MATRIX, &IDENTITY_MATRIX, &IDENTITY_MATRIX)
        .expect("render");

    let bind = api.position_of("bind_program(1)");
    let projection = api.position_of("set_uniform_matrix4(projectionMatrix)");
    let view = api.position_of("set_uniform_matrix4(viewMatrix)");
    let unbind = api.position_of("unbind_program()");
    assert!(bind < projection);
    assert!(projection < view);
    assert!(view < unbind);

    // Objects draw in insertion order, inside the program binding.
    assert_eq!(*events.borrow(), vec!["render(10)", "render(11)"]);
    assert_eq!(unbind, api.calls().len() - 1);
}

#[test]
fn should_surface_a_missing_uniform_as_an_error() {
    let api = RecordingApi::new();
    let mut program = linked_program(&api, 1);
    api.missing_uniforms
        .borrow_mut()
        .insert("viewMatrix".to_owned());

    let result = program.render(&IDENTITY_MATRIX, &IDENTITY_MATRIX, &IDENTITY_MATRIX);

    assert_eq!(
        result,
        Err(GraphicsError::UniformNotFound("viewMatrix".to_owned()))
    );
}

#[test]
fn should_hand_back_the_previous_objects_on_replacement() {
    let api = RecordingApi::new();
    let mut program = linked_program(&api, 1);
    let events = Rc::new(RefCell::new(Vec::new()));

    program.set_graphics_objects(vec![Box::new(RecordingObject::new(7, events.clone()))]);
    let previous =
        program.set_graphics_objects(vec![Box::new(RecordingObject::new(8, events.clone()))]);

    assert_eq!(previous.len(), 1);
    assert_eq!(previous[0].id(), 7);
}

#[test]
fn should_init_and_update_every_object() {
    let api = RecordingApi::new();
    let mut program = linked_program(&api, 1);
    let events = Rc::new(RefCell::new(Vec::new()));
    program.set_graphics_objects(vec![
        Box::new(RecordingObject::new(1, events.clone())),
        Box::new(RecordingObject::new(2, events.clone())),
    ]);

    program.init_graphics_objects().expect("init");
    program.update_graphics_objects();

    assert_eq!(
        *events.borrow(),
        vec!["init(1)", "init(2)", "update(1)", "update(2)"]
    );
}

#[test]
fn should_upload_attribute_data_through_a_fresh_buffer() {
    let api = RecordingApi::new();
    let program = linked_program(&api, 1);
    api.take_calls();

    let data = [0.0_f32; 9];
    program
        .attach_array_buffer_f32(0, 3, false, 0, 0, &data)
        .expect("attach");

    assert_eq!(
        api.calls(),
        vec![
            "create_buffer() -> 4",
            "bind_array_buffer(4)",
            "array_buffer_static_data(36 bytes)",
            "enable_vertex_attribute(0)",
            "vertex_attribute_pointer_f32(0, 3)",
        ]
    );
}
