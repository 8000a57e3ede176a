//! Reply generation.
//!
//! The shell never talks to a model. [`MockResponder`] waits for a fixed
//! delay and hands back one of a few canned Markdown answers, rotating
//! through them in order. The [`Responder`] trait is the seam a real
//! backend would plug into.

use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Default artificial latency before a mock reply is returned.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(2000);

/// Future returned by [`Responder::respond`].
pub type ReplyFuture = Pin<Box<dyn Future<Output = Result<String, ResponderError>> + Send>>;

/// Something that can answer a user message.
pub trait Responder: Send + Sync {
    /// Produce a reply to `prompt`.
    fn respond(&self, prompt: &str) -> ReplyFuture;
}

/// Errors produced while generating a reply.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResponderError {
    /// The responder has nothing to say.
    #[error("no canned replies configured")]
    NoReplies,

    /// Generation failed for another reason.
    #[error("failed to generate response: {0}")]
    Failed(String),
}

/// Canned-reply responder with artificial latency.
#[derive(Debug, Clone)]
pub struct MockResponder {
    delay: Duration,
    replies: Arc<Vec<String>>,
    next: Arc<AtomicUsize>,
}

impl MockResponder {
    /// Create a responder with the built-in replies.
    pub fn new(delay: Duration) -> Self {
        Self::with_replies(delay, CANNED_REPLIES.iter().map(|r| (*r).to_string()))
    }

    /// Create a responder that rotates through `replies`.
    pub fn with_replies(delay: Duration, replies: impl IntoIterator<Item = String>) -> Self {
        Self {
            delay,
            replies: Arc::new(replies.into_iter().collect()),
            next: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Configured delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for MockResponder {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

impl Responder for MockResponder {
    fn respond(&self, prompt: &str) -> ReplyFuture {
        let delay = self.delay;
        let replies = Arc::clone(&self.replies);
        let index = self.next.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(prompt_len = prompt.len(), index, "generating mock reply");

        Box::pin(async move {
            tokio::time::sleep(delay).await;
            if replies.is_empty() {
                return Err(ResponderError::NoReplies);
            }
            Ok(replies[index % replies.len()].clone())
        })
    }
}

const CANNED_REPLIES: [&str; 3] = [
    r"Great question! Here's what you need to know:

## Passing Parameters

You can pass parameters when navigating:

```javascript
navigation.navigate('Details', {
  itemId: 86,
  otherParam: 'anything you want here',
});
```

## Accessing Parameters

In the destination screen:

```javascript
function DetailsScreen({ route }) {
  const { itemId, otherParam } = route.params;
  return (
    <View>
      <Text>Item ID: {itemId}</Text>
    </View>
  );
}
```

This makes it easy to pass data between screens!",
    r"That's an interesting topic! Let me break it down:

### Key Points:
- **Performance** is crucial for mobile apps
- **Navigation** should be smooth and intuitive
- **State management** helps with data flow

Would you like me to elaborate on any of these points?",
    r"Here's a comprehensive answer:

## Best Practices

1. **Keep it simple** - Don't overcomplicate the user interface
2. **Follow platform conventions** - iOS and Android have different patterns
3. **Test on real devices** - Simulators don't always represent real performance

### Code Example:
```typescript
const MyComponent = () => {
  const [data, setData] = useState(null);

  return (
    <View>
      <Text>{data?.title || 'Loading...'}</Text>
    </View>
  );
};
```

Hope this helps!",
];
