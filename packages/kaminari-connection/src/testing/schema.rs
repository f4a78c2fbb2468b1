use super::posts::*;
use super::self_prelude::*;
use crate::connection::*;
use crate::page::*;
use crate::registry::*;
use crate::resolver::*;
use crate::schema::*;

pub const POST_TYPE: &str = "Post";

/// Posts served by the test schema.
pub struct TestPosts(pub Vec<Post>);

pub fn new_post_object() -> Object {
    Object::new(POST_TYPE)
        .field(Field::new("id", TypeRef::named_nn(TypeRef::INT), |ctx| {
            FieldFuture::new(async move {
                let post = ctx.parent_value.try_downcast_ref::<Post>()?;
                Ok(Some(FieldValue::value(post.id)))
            })
        }))
        .field(Field::new("title", TypeRef::named_nn(TypeRef::STRING), |ctx| {
            FieldFuture::new(async move {
                let post = ctx.parent_value.try_downcast_ref::<Post>()?;
                Ok(Some(FieldValue::value(post.title.clone())))
            })
        }))
}

fn resolve_posts(ctx: ResolverContext) -> FieldFuture {
    FieldFuture::new(async move {
        let posts = ctx.data::<TestPosts>()?;
        let page = paginate(&posts.0, ctx.page_arg()?, ctx.per_arg()?);
        Ok(Some(PageValue::field_value(page)))
    })
}

/// Build a schema with a `posts` connection over `count` posts.
pub fn build_test_schema(
    registry: &KaminariRegistry,
    overrides: ConnectionOverrides,
    count: u64,
) -> SchemaBuilder {
    let connection = registry
        .connection(POST_TYPE)
        .kaminari_connection(overrides);
    let query = Object::new("Query").field(connection.to_field("posts", resolve_posts));

    Schema::build("Query", None, None)
        .register(new_post_object())
        .register(query)
        .register_kaminari(registry)
        .data(TestPosts(new_test_posts(count)))
}

pub fn new_test_schema(registry: &KaminariRegistry, count: u64) -> KaminariResult<Schema> {
    finish_schema(build_test_schema(registry, ConnectionOverrides::new(), count))
}
